fn main() {
    #[cfg(feature = "csr")]
    session_gate::mount();
}
