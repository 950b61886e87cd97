use std::fmt::Display;
use std::fs::File;
use std::io::{self, BufWriter, StdoutLock, Write};
use std::path::Path;

use flate2::Compression;
use flate2::write::GzEncoder;

///
/// Where results go. Call [OutputWriter::finish] when done: dropping a
/// writer without it swallows the final flush errors and, for gzip, can
/// leave the stream without its trailer.
///
pub enum OutputWriter {
    Stdout(BufWriter<StdoutLock<'static>>),
    File(BufWriter<File>),
    Gzip(GzEncoder<BufWriter<File>>),
}

impl OutputWriter {
    /// Flush everything and, for gzip, write the trailer.
    pub fn finish(self) -> io::Result<()> {
        match self {
            OutputWriter::Stdout(mut out) => out.flush(),
            OutputWriter::File(mut out) => out.flush(),
            OutputWriter::Gzip(encoder) => {
                let mut inner = encoder.finish()?;
                inner.flush()
            }
        }
    }
}

impl Write for OutputWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            OutputWriter::Stdout(out) => out.write(buf),
            OutputWriter::File(out) => out.write(buf),
            OutputWriter::Gzip(out) => out.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            OutputWriter::Stdout(out) => out.flush(),
            OutputWriter::File(out) => out.flush(),
            OutputWriter::Gzip(out) => out.flush(),
        }
    }
}

///
/// Open the output sink: a buffered file when `path` is given (gzip
/// compressed when it ends in `.gz`), buffered stdout otherwise.
///
/// Parent directories of `path` are created as needed.
pub fn create_output(path: Option<&Path>) -> io::Result<OutputWriter> {
    let Some(path) = path else {
        return Ok(OutputWriter::Stdout(BufWriter::new(io::stdout().lock())));
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = BufWriter::new(File::create(path)?);
    let is_gzipped = path.extension().is_some_and(|ext| ext == "gz");
    match is_gzipped {
        true => Ok(OutputWriter::Gzip(GzEncoder::new(file, Compression::default()))),
        false => Ok(OutputWriter::File(file)),
    }
}

///
/// Write one line per row using the row's `Display` impl. Rows are written
/// as they are produced; nothing is buffered beyond the writer itself.
///
/// # Returns
/// The number of rows written.
pub fn write_rows<W, I, T>(writer: &mut W, rows: I) -> io::Result<usize>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = T>,
    T: Display,
{
    let mut n = 0;
    for row in rows {
        writeln!(writer, "{}", row)?;
        n += 1;
    }
    Ok(n)
}
