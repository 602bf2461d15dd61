use std::{fs::File, io::Write, path::Path};

use crate::error::{Error, Result};

/// Writes the generated IR verbatim, truncating anything already at `path`
pub fn write_ir(text: &str, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path).map_err(|source| Error::Create {
        path: path.to_path_buf(),
        source,
    })?;

    file.write_all(text.as_bytes()).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_text_verbatim() {
        let path = std::env::temp_dir().join(format!("bfir-output-{}.ll", std::process::id()));
        write_ir("first\nsecond", &path).unwrap();
        write_ir("ret i32 0\n}", &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ret i32 0\n}");
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_directory_is_a_create_error() {
        let path = std::env::temp_dir()
            .join("bfir-does-not-exist")
            .join("nested")
            .join("out.ll");
        match write_ir("", &path) {
            Err(Error::Create { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected a create error, got {:?}", other),
        }
    }
}
