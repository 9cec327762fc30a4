use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::info;

use crate::error::FuelError;

/// Reads whitespace separated masses, any number per line.
///
/// Stops at the first token that is not an integer.
pub fn parse_masses<R: BufRead>(reader: R) -> Result<Vec<i64>, FuelError> {
    let mut masses = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| FuelError::Read { source })?;

        for token in line.split_whitespace() {
            let mass = token.parse().map_err(|source| FuelError::Parse {
                token: token.to_string(),
                line: index + 1,
                source,
            })?;
            masses.push(mass);
        }
    }

    Ok(masses)
}

pub fn read_masses(path: &Path) -> Result<Vec<i64>, FuelError> {
    let input = File::open(path).map_err(|source| FuelError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let masses = parse_masses(BufReader::new(input))?;

    info!("read {} masses from {}", masses.len(), path.display());
    Ok(masses)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn one_mass_per_line() {
        let masses = parse_masses(Cursor::new("12\n14\n1969\n100756\n")).unwrap();
        assert_eq!(masses, vec![12, 14, 1969, 100756]);
    }

    #[test]
    fn any_whitespace_separates() {
        let masses = parse_masses(Cursor::new("  12 14\t1969\r\n\n100756")).unwrap();
        assert_eq!(masses, vec![12, 14, 1969, 100756]);
    }

    #[test]
    fn empty_input_has_no_masses() {
        assert!(parse_masses(Cursor::new("")).unwrap().is_empty());
        assert!(parse_masses(Cursor::new("\n \n")).unwrap().is_empty());
    }

    #[test]
    fn negative_masses_parse() {
        assert_eq!(parse_masses(Cursor::new("-4 +7")).unwrap(), vec![-4, 7]);
    }

    #[test]
    fn bad_token_reports_line() {
        let err = parse_masses(Cursor::new("12\n14 abc\n1969")).unwrap_err();
        match err {
            FuelError::Parse { token, line, .. } => {
                assert_eq!(token, "abc");
                assert_eq!(line, 2);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn decimals_are_rejected() {
        let err = parse_masses(Cursor::new("12.5")).unwrap_err();
        assert!(matches!(err, FuelError::Parse { line: 1, .. }));
    }

    #[test]
    fn invalid_utf8_is_read_error() {
        let err = parse_masses(Cursor::new(vec![b'1', b'\n', 0xff, b'\n'])).unwrap_err();
        assert!(matches!(err, FuelError::Read { .. }));
    }

    #[test]
    fn missing_file_is_open_error() {
        let err = read_masses(Path::new("this/input/does/not/exist")).unwrap_err();
        assert!(matches!(err, FuelError::Open { .. }));
        assert!(err.to_string().contains("this/input/does/not/exist"));
    }
}
