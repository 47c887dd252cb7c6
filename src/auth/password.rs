use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Encode a password for storage.
///
/// Plain reversible base64, not a KDF: seed documents ship ready-made
/// values and authentication compares encodings for equality.
pub fn hash_password(plain: &str) -> String {
    STANDARD.encode(plain.as_bytes())
}

pub fn verify_password(plain: &str, hash: &str) -> bool {
    hash_password(plain) == hash
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify_roundtrip() {
        let password = "Secur3P@ssw0rd!";
        let hash = hash_password(password);
        assert!(verify_password(password, &hash));
    }

    #[test]
    fn verify_rejects_wrong_password() {
        let hash = hash_password("correct-horse-battery-staple");
        assert!(!verify_password("wrong-password", &hash));
    }

    #[test]
    fn encoding_matches_persisted_format() {
        // Value format existing seed documents carry.
        assert_eq!(hash_password("password123"), "cGFzc3dvcmQxMjM=");
    }
}
