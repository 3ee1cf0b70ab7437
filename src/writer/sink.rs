/// Where the bytes [`JsonWriter`](super::JsonWriter) produces actually go.
///
/// The Rust translation of the C API's `jiffy_builder_cbs_t` vtable: the
/// writer never buffers, so every byte it decides to emit is handed to
/// [`WriterSink::on_write`] immediately. There is no `on_error` hook here,
/// unlike the C vtable; every writer method already returns a `Result`, so
/// the caller observes failures synchronously at the call site without a
/// second notification channel to keep in sync.
pub trait WriterSink {
    /// Consume a chunk of output bytes, in order.
    fn on_write(&mut self, bytes: &[u8]);

    /// Called once, by [`JsonWriter::fini`](super::JsonWriter::fini), after
    /// the last byte has been written.
    fn on_fini(&mut self) {}
}

/// A [`WriterSink`] that appends everything to a `Vec<u8>`. The common case
/// when the caller just wants an owned buffer of JSON bytes rather than
/// streaming to a socket or file.
#[derive(Debug, Default, Clone)]
pub struct VecSink(pub Vec<u8>);

impl WriterSink for VecSink {
    fn on_write(&mut self, bytes: &[u8]) {
        self.0.extend_from_slice(bytes);
    }
}
