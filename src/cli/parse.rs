use thiserror::Error;

use crate::settings::Settings;

/// What the command line asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthArg {
    Default,
    Given(i64),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgError {
    #[error("Invalid length: {length}. Allowed range is [{min}-{max}].")]
    OutOfRange { length: i64, min: usize, max: usize },

    #[error("Invalid argument. Length must be a numeric value.")]
    NotNumeric,

    #[error("Invalid argument. Length must be a numeric value.")]
    TooMany,
}

/// Parse `args` (program name first). At most one integer argument.
pub fn parse(args: &[String]) -> Result<LengthArg, ArgError> {
    match args {
        [] | [_] => Ok(LengthArg::Default),
        [_, arg] => arg.parse::<i64>().map(LengthArg::Given).map_err(|e| {
            tracing::debug!(%arg, error = %e, "length argument is not an integer");
            ArgError::NotNumeric
        }),
        [_, rest @ ..] => {
            tracing::debug!(count = rest.len(), "more than one argument");
            Err(ArgError::TooMany)
        }
    }
}

/// Accept `length` only inside the configured bounds.
pub fn check_range(length: i64, settings: &Settings) -> Result<usize, ArgError> {
    if settings.allows(length) {
        // allows() implies a non-negative value that fits usize
        Ok(length as usize)
    } else {
        Err(ArgError::OutOfRange {
            length,
            min: settings.min_length,
            max: settings.max_length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("strongpass")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn no_argument_means_default() {
        assert_eq!(parse(&args(&[])), Ok(LengthArg::Default));
        assert_eq!(parse(&[]), Ok(LengthArg::Default));
    }

    #[test]
    fn numeric_argument() {
        assert_eq!(parse(&args(&["12"])), Ok(LengthArg::Given(12)));
        assert_eq!(parse(&args(&["+12"])), Ok(LengthArg::Given(12)));
        assert_eq!(parse(&args(&["-3"])), Ok(LengthArg::Given(-3)));
    }

    #[test]
    fn non_numeric_argument() {
        for bad in ["abc", "12a", "", " 12", "1.5", "99999999999999999999"] {
            assert_eq!(parse(&args(&[bad])), Err(ArgError::NotNumeric), "{bad:?}");
        }
    }

    #[test]
    fn more_than_one_argument() {
        assert_eq!(parse(&args(&["10", "12"])), Err(ArgError::TooMany));
        assert_eq!(parse(&args(&["a", "b", "c"])), Err(ArgError::TooMany));
    }

    #[test]
    fn range_check_uses_settings() {
        let settings = Settings::default();
        assert_eq!(check_range(8, &settings), Ok(8));
        assert_eq!(check_range(40, &settings), Ok(40));
        assert_eq!(
            check_range(7, &settings),
            Err(ArgError::OutOfRange {
                length: 7,
                min: 8,
                max: 40
            })
        );
        assert!(check_range(41, &settings).is_err());
        assert!(check_range(-10, &settings).is_err());
    }

    #[test]
    fn messages() {
        let err = ArgError::OutOfRange {
            length: 50,
            min: 8,
            max: 40,
        };
        assert_eq!(err.to_string(), "Invalid length: 50. Allowed range is [8-40].");
        for err in [ArgError::NotNumeric, ArgError::TooMany] {
            assert_eq!(
                err.to_string(),
                "Invalid argument. Length must be a numeric value."
            );
        }
    }
}
