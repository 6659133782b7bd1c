/// Fault raised by a [`MatrixSink`](crate::display::MatrixSink) while writing
/// to the hardware. Never crosses the HTTP boundary; the display service logs
/// it and forces the matrix to a cleared state instead.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("matrix rejected frame: {0}")]
    Sink(String),

    #[error("matrix device unavailable")]
    Unavailable,
}
