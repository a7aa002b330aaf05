//! Ordered credential fallback.

use log::{debug, warn};

use crate::config::Credential;
use crate::error::{NarrativeError, Result};

///
/// Run `attempt` with each credential in order, returning the first success.
///
/// # Arguments
/// - credentials: keys to try, in priority order
/// - attempt: one request made with the given credential
///
/// # Returns
/// - the first successful result, `NoCredentials` for an empty list, or
///   `Exhausted` carrying the last failure
pub fn try_credentials<T, F>(credentials: &[Credential], mut attempt: F) -> Result<T>
where
    F: FnMut(&Credential) -> Result<T>,
{
    let mut last = None;

    for (index, credential) in credentials.iter().enumerate() {
        match attempt(credential) {
            Ok(value) => {
                debug!("Credential #{} succeeded", index + 1);
                return Ok(value);
            }
            Err(e) => {
                warn!(
                    "Credential #{} of {} failed: {}",
                    index + 1,
                    credentials.len(),
                    e
                );
                last = Some(e);
            }
        }
    }

    match last {
        Some(last) => Err(NarrativeError::Exhausted {
            attempts: credentials.len(),
            last: Box::new(last),
        }),
        None => Err(NarrativeError::NoCredentials),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn credentials() -> Vec<Credential> {
        vec![
            Credential::new("first"),
            Credential::new("second"),
            Credential::new("third"),
        ]
    }

    fn status(code: u16) -> NarrativeError {
        NarrativeError::Status {
            url: "https://example.org".to_string(),
            code,
        }
    }

    #[rstest]
    fn test_first_success_wins(credentials: Vec<Credential>) {
        let mut tried = Vec::new();
        let result = try_credentials(&credentials, |c| {
            tried.push(c.api_key.clone());
            if c.api_key == "second" {
                Ok(c.api_key.to_uppercase())
            } else {
                Err(status(429))
            }
        });

        assert_eq!(result.unwrap(), "SECOND");
        assert_eq!(tried, vec!["first", "second"]);
    }

    #[rstest]
    fn test_exhausted_reports_last_error(credentials: Vec<Credential>) {
        let mut code = 500;
        let result: Result<()> = try_credentials(&credentials, |_| {
            code += 1;
            Err(status(code))
        });

        match result.unwrap_err() {
            NarrativeError::Exhausted { attempts, last } => {
                assert_eq!(attempts, 3);
                assert!(matches!(*last, NarrativeError::Status { code: 503, .. }));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[rstest]
    fn test_no_credentials() {
        let result: Result<()> = try_credentials(&[], |_| Ok(()));
        assert!(matches!(result, Err(NarrativeError::NoCredentials)));
    }
}
