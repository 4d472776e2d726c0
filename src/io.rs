// src/io.rs
//! Formatted writes to output sinks, optionally shared between threads, and
//! whitespace-separated reads from input sources.
//!
//! ```
//! use endian_rs::io::SyncedSink;
//! use endian_rs::synced_writeln;
//!
//! let sink = SyncedSink::new(Vec::new());
//! synced_writeln!(sink, "{} = {:#06x}", "magic", 0x1234).unwrap();
//! assert_eq!(sink.into_inner(), b"magic = 0x1234\n");
//! ```

use std::any::type_name;
use std::fmt;
use std::io::{self, BufRead, ErrorKind, Write};
use std::str::FromStr;

use parking_lot::{Mutex, MutexGuard};

use crate::error::{Error, Result};

/// Write formatted output to `sink`.
pub fn write<W: Write + ?Sized>(sink: &mut W, args: fmt::Arguments<'_>) -> Result<()> {
    sink.write_fmt(args)?;
    Ok(())
}

/// Write formatted output followed by a newline to `sink`.
pub fn writeln<W: Write + ?Sized>(sink: &mut W, args: fmt::Arguments<'_>) -> Result<()> {
    sink.write_fmt(args)?;
    sink.write_all(b"\n")?;
    Ok(())
}

/// Read the next whitespace-separated token from `source` and parse it into
/// `target`.
///
/// Leading whitespace is skipped and the delimiter after the token is left in
/// `source`. `target` is only assigned when parsing succeeds. Running out of
/// input before a token starts is an [`Error::Io`] of kind `UnexpectedEof`.
///
/// ```
/// use endian_rs::io::read;
///
/// let mut input = "  0x1F 42\n".as_bytes();
/// let (mut label, mut count) = (String::new(), 0u32);
/// read(&mut input, &mut label).unwrap();
/// read(&mut input, &mut count).unwrap();
/// assert_eq!((label.as_str(), count), ("0x1F", 42));
/// ```
pub fn read<R, T>(source: &mut R, target: &mut T) -> Result<()>
where
    R: BufRead + ?Sized,
    T: FromStr,
    T::Err: fmt::Display,
{
    let token = next_token(source)?;
    let text = String::from_utf8(token).map_err(|e| Error::Parse {
        token: String::from_utf8_lossy(e.as_bytes()).into_owned(),
        target: type_name::<T>(),
        reason: e.utf8_error().to_string(),
    })?;

    *target = text.parse().map_err(|e: T::Err| Error::Parse {
        token: text.clone(),
        target: type_name::<T>(),
        reason: e.to_string(),
    })?;
    Ok(())
}

fn next_token<R: BufRead + ?Sized>(source: &mut R) -> Result<Vec<u8>> {
    let mut token = Vec::new();
    loop {
        let buf = match source.fill_buf() {
            Ok(buf) => buf,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if buf.is_empty() {
            break;
        }

        let mut used = 0;
        let mut complete = false;
        for &byte in buf {
            if byte.is_ascii_whitespace() {
                if !token.is_empty() {
                    complete = true;
                    break;
                }
            } else {
                token.push(byte);
            }
            used += 1;
        }
        source.consume(used);
        if complete {
            break;
        }
    }

    if token.is_empty() {
        return Err(io::Error::new(ErrorKind::UnexpectedEof, "no token before end of input").into());
    }
    Ok(token)
}

/// A sink whose writes are serialized across threads.
///
/// Every [`write`](SyncedSink::write) or [`writeln`](SyncedSink::writeln) is
/// formatted up front and emitted while holding the lock, so output from
/// different threads never interleaves within one call.
#[derive(Debug, Default)]
pub struct SyncedSink<W> {
    inner: Mutex<W>,
}

impl<W: Write> SyncedSink<W> {
    pub fn new(sink: W) -> Self {
        SyncedSink { inner: Mutex::new(sink) }
    }

    pub fn write(&self, args: fmt::Arguments<'_>) -> Result<()> {
        let text = fmt::format(args);
        self.emit(text.as_bytes())
    }

    pub fn writeln(&self, args: fmt::Arguments<'_>) -> Result<()> {
        let mut text = fmt::format(args);
        text.push('\n');
        self.emit(text.as_bytes())
    }

    pub fn flush(&self) -> Result<()> {
        self.inner.lock().flush()?;
        Ok(())
    }

    /// Exclusive access to the underlying sink, for multi-part output.
    pub fn lock(&self) -> MutexGuard<'_, W> {
        self.inner.lock()
    }

    pub fn into_inner(self) -> W {
        self.inner.into_inner()
    }

    fn emit(&self, bytes: &[u8]) -> Result<()> {
        let mut sink = self.inner.lock();
        sink.write_all(bytes)?;
        Ok(())
    }
}

/// `synced_write!(sink, "fmt", args...)` on a [`SyncedSink`].
#[macro_export]
macro_rules! synced_write {
    ($sink:expr, $($arg:tt)*) => {
        $sink.write(::std::format_args!($($arg)*))
    };
}

/// `synced_writeln!(sink, "fmt", args...)` on a [`SyncedSink`].
#[macro_export]
macro_rules! synced_writeln {
    ($sink:expr, $($arg:tt)*) => {
        $sink.writeln(::std::format_args!($($arg)*))
    };
}

/// `read_values!(source, &mut a, &mut b, ...)` reads one token per target, in
/// order, stopping at the first failure.
///
/// `source` is a `&mut` to any [`BufRead`](std::io::BufRead).
#[macro_export]
macro_rules! read_values {
    ($source:expr, $($target:expr),+ $(,)?) => {{
        let source = $source;
        let mut result: $crate::Result<()> = Ok(());
        $(
            if result.is_ok() {
                result = $crate::io::read(&mut *source, $target);
            }
        )+
        result
    }};
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_plain_write() {
        let mut out = Vec::new();
        write(&mut out, format_args!("{}-{}", 1, 2)).unwrap();
        writeln(&mut out, format_args!("{:x}", 255)).unwrap();
        assert_eq!(out, b"1-2ff\n");
    }

    #[test]
    fn test_read_mixed_values() {
        let mut input = "42 -7\n\t3.5  word x\ntrue".as_bytes();
        let mut count = 0u32;
        let mut offset = 0i64;
        let mut scale = 0.0f64;
        let mut name = String::new();
        let mut tag = ' ';
        let mut flag = false;

        crate::read_values!(
            &mut input,
            &mut count,
            &mut offset,
            &mut scale,
            &mut name,
            &mut tag,
            &mut flag,
        )
        .unwrap();

        assert_eq!(count, 42);
        assert_eq!(offset, -7);
        assert_eq!(scale, 3.5);
        assert_eq!(name, "word");
        assert_eq!(tag, 'x');
        assert!(flag);

        let err = read(&mut input, &mut count).unwrap_err();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == ErrorKind::UnexpectedEof));
    }

    #[test]
    fn test_read_leaves_delimiter() {
        let mut input = "12 rest".as_bytes();
        let mut value = 0u8;
        read(&mut input, &mut value).unwrap();
        assert_eq!(value, 12);
        assert_eq!(input, b" rest");
    }

    #[test]
    fn test_read_malformed_token() {
        let mut input = "17 seventeen 18".as_bytes();
        let mut first = 0u16;
        let mut second = 5u16;
        let mut third = 0u16;

        let err = crate::read_values!(&mut input, &mut first, &mut second, &mut third).unwrap_err();
        match err {
            Error::Parse { ref token, target, .. } => {
                assert_eq!(token, "seventeen");
                assert_eq!(target, "u16");
            }
            ref other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().starts_with("Cannot parse \"seventeen\" as u16: "));
        assert_eq!(first, 17);
        assert_eq!(second, 5);
        assert_eq!(third, 0);

        let mut bad_utf8: &[u8] = &[0xFF, 0xFE, b' '];
        let mut text = String::new();
        assert!(matches!(read(&mut bad_utf8, &mut text), Err(Error::Parse { .. })));
    }

    #[test]
    fn test_read_io_error_propagates() {
        struct Failing;

        impl std::io::Read for Failing {
            fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(ErrorKind::ConnectionReset, "gone"))
            }
        }

        let mut source = std::io::BufReader::new(Failing);
        let mut value = 0i32;
        let err = read(&mut source, &mut value).unwrap_err();
        assert!(matches!(err, Error::Io(ref e) if e.kind() == ErrorKind::ConnectionReset));
    }

    #[test]
    fn test_lines_do_not_interleave() {
        let sink = Arc::new(SyncedSink::new(Vec::new()));
        let handles: Vec<_> = (0..8)
            .map(|t| {
                let sink = Arc::clone(&sink);
                thread::spawn(move || {
                    for i in 0..100 {
                        synced_writeln!(sink, "thread {} line {}", t, i).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let sink = Arc::try_unwrap(sink).ok().unwrap();
        let text = String::from_utf8(sink.into_inner()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 800);
        assert!(lines.iter().all(|l| l.starts_with("thread ") && l.contains(" line ")));
    }

    #[test]
    fn test_write_error_propagates() {
        struct Broken;

        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let sink = SyncedSink::new(Broken);
        let err = synced_write!(sink, "x").unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
