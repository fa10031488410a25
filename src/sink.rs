use std::io::{self, Write};

/// Streamed downloads are delivered to the sink in chunks of at most this
/// many bytes.
pub const DOWNLOAD_CHUNK_SIZE: usize = 2 * 1024;

/// A caller-supplied destination for streamed binary results.
///
/// The client calls [`close`](Sink::close) exactly once on every exit path,
/// successful or not. Any `std::io::Write` is a `Sink` (`close` flushes;
/// dropping releases the resource as usual).
pub trait Sink {
    fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()>;
    fn close(&mut self) -> io::Result<()>;
}

impl<W: Write> Sink for W {
    fn write_chunk(&mut self, chunk: &[u8]) -> io::Result<()> {
        self.write_all(chunk)
    }

    fn close(&mut self) -> io::Result<()> {
        self.flush()
    }
}

/// Write `data` to the sink in `DOWNLOAD_CHUNK_SIZE` slices.
pub(crate) fn pump_chunks(sink: &mut dyn Sink, data: &[u8]) -> io::Result<()> {
    for chunk in data.chunks(DOWNLOAD_CHUNK_SIZE) {
        sink.write_chunk(chunk)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingSink {
        chunks: Vec<usize>,
        bytes: Vec<u8>,
        closed: usize,
    }

    // goes through the blanket io::Write impl: write_chunk is one write_all,
    // close is flush
    impl Write for RecordingSink {
        fn write(&mut self, chunk: &[u8]) -> io::Result<usize> {
            self.chunks.push(chunk.len());
            self.bytes.extend_from_slice(chunk);
            Ok(chunk.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            self.closed += 1;
            Ok(())
        }
    }

    #[test]
    fn pump_slices_into_bounded_chunks() {
        let data: Vec<u8> = (0..5000u32).map(|i| (i % 251) as u8).collect();
        let mut sink = RecordingSink::default();
        pump_chunks(&mut sink, &data).unwrap();
        assert_eq!(sink.bytes, data);
        assert_eq!(sink.chunks, [2048, 2048, 904]);
        assert!(sink.chunks.iter().all(|len| *len <= DOWNLOAD_CHUNK_SIZE));
    }

    #[test]
    fn pump_passes_small_payload_whole() {
        let mut sink = RecordingSink::default();
        pump_chunks(&mut sink, b"pdf bytes").unwrap();
        assert_eq!(sink.chunks, [9]);
    }

    #[test]
    fn write_impl_is_a_sink() {
        let mut buffer: Vec<u8> = Vec::new();
        {
            let sink: &mut dyn Sink = &mut buffer;
            sink.write_chunk(b"abc").unwrap();
            sink.close().unwrap();
        }
        assert_eq!(buffer, b"abc");
    }
}
