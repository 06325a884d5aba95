use std::ffi::OsStr;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::Error;
use crate::pass2::Generated;

/// `<out_dir>/<input stem>.obj`
pub fn output_path(input: &str, out_dir: &Path) -> PathBuf {
    let stem = Path::new(input).file_stem().unwrap_or(OsStr::new("out"));
    let mut name = stem.to_os_string();
    name.push(".obj");
    out_dir.join(name)
}

/// Write the object program in one go: the text goes to a sibling temporary
/// file which is renamed over `path` only once it is complete.
pub fn write(path: &Path, gen: &Generated) -> Result<(), Error> {
    let name = path.display().to_string();
    let tmp = path.with_extension("obj.tmp");

    let mut file =
        std::fs::File::create(&tmp).map_err(|e| Error::FileCreate(tmp.display().to_string(), e))?;
    let written = file
        .write_all(gen.object_program().as_bytes())
        .and_then(|_| file.sync_all());
    drop(file);

    if let Err(e) = written.and_then(|_| std::fs::rename(&tmp, path)) {
        let _ = std::fs::remove_file(&tmp);
        return Err(Error::FileWrite(name, e));
    }
    Ok(())
}
