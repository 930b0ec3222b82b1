//! Raw directory enumeration for `lister`.

use std::io::Write;
use std::path::Path;

use nix::dir::Dir;
use nix::fcntl::OFlag;
use nix::sys::stat::Mode;

use crate::Error;

/// Writes the name of every entry of `path`, one per line, in the order the
/// kernel returns them. `.` and `..` are included when the filesystem yields
/// them. Returns the number of entries written.
///
/// Nothing is written if the directory cannot be opened. The directory
/// handle is closed when this returns, on success or failure.
pub fn list_dir<W: Write>(path: &Path, out: &mut W) -> Result<usize, Error> {
    let display = || path.to_string_lossy().into_owned();

    let mut dir = Dir::open(
        path,
        OFlag::O_RDONLY | OFlag::O_DIRECTORY | OFlag::O_CLOEXEC,
        Mode::empty(),
    )
    .map_err(|source| Error::OpenDir {
        path: display(),
        source,
    })?;

    let mut listed = 0;
    for entry in dir.iter() {
        let entry = entry.map_err(|source| Error::ReadDir {
            path: display(),
            source,
        })?;
        out.write_all(entry.file_name().to_bytes()).map_err(Error::Write)?;
        out.write_all(b"\n").map_err(Error::Write)?;
        listed += 1;
    }
    Ok(listed)
}
