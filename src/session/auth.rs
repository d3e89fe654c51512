//! RETS-UA-Authorization digest computation.
//!
//! Implements the chained-MD5 scheme from the RETS 1.8 specification, §3:
//!
//! ```text
//! a1  ::= MD5( product ":" UserAgent-Password )
//! out ::= LHEX( MD5( LHEX(a1) ":" RETS-Request-ID ":" session-id ":" version-info ) )
//! ```
//!
//! Both steps hash the lowercase-hex digest of the previous step, with a
//! literal ASCII colon between fields. Empty fields are valid inputs; the
//! digest is always computable.

use crate::config::UserAgent;

/// Lowercase hex MD5 of a string.
fn hex_md5(input: &str) -> String {
    use md5::{Digest, Md5};
    hex::encode(Md5::digest(input.as_bytes()))
}

/// Compute the `RETS-UA-Authorization` digest token (without the
/// `Digest ` prefix).
pub(crate) fn ua_digest(
    user_agent: &UserAgent,
    request_id: &str,
    session_id: &str,
    version: &str,
) -> String {
    let a1 = hex_md5(&format!("{}:{}", user_agent.name, user_agent.pass));
    hex_md5(&format!("{a1}:{request_id}:{session_id}:{version}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_md5_known_vector() {
        // MD5("") = d41d8cd98f00b204e9800998ecf8427e
        assert_eq!(hex_md5(""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(
            hex_md5("RETS-Connector1/2:"),
            "d9f0d673cb056eb5d2fdd4d32e3ea575"
        );
    }

    #[test]
    fn test_ua_digest_pre_login() {
        // a1 = MD5("RETS-Connector1/2:"), then MD5(a1 + ":::RETS/1.7.2")
        let digest = ua_digest(&UserAgent::default(), "", "", "RETS/1.7.2");
        assert_eq!(digest, "953145fba2e1945ead64a5c27334d474");
    }

    #[test]
    fn test_ua_digest_with_session_id() {
        let digest = ua_digest(&UserAgent::default(), "", "abc123", "RETS/1.7.2");
        assert_eq!(digest, "33338c2f70471ad1d8f56a740211384b");
    }

    #[test]
    fn test_ua_digest_custom_agent() {
        let agent = UserAgent {
            name: "Acme/1.0".to_string(),
            pass: "hunter2".to_string(),
        };
        let digest = ua_digest(&agent, "", "sess42", "RETS/1.8");
        assert_eq!(digest, "0cb7086f582e81dc833aa9b8943fc7fe");
    }

    #[test]
    fn test_ua_digest_deterministic() {
        let agent = UserAgent::default();
        let first = ua_digest(&agent, "", "abc", "RETS/1.7.2");
        let second = ua_digest(&agent, "", "abc", "RETS/1.7.2");
        assert_eq!(first, second);
    }
}
