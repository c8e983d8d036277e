use web_sys::window;

const TOKEN_KEY: &str = "token";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the bearer token to localStorage
pub fn save_token(token: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Get the bearer token from localStorage
pub fn get_token() -> Option<String> {
    let raw = get_local_storage()?.get_item(TOKEN_KEY).ok()??;
    decode_stored_token(&raw)
}

/// Sessions saved by earlier builds hold the token as a JSON string,
/// quotes included; this build stores it bare.
fn decode_stored_token(raw: &str) -> Option<String> {
    let token = if raw.starts_with('"') {
        match serde_json::from_str::<String>(raw) {
            Ok(token) => token,
            Err(e) => {
                log::warn!("ignoring malformed stored token: {}", e);
                return None;
            }
        }
    } else {
        raw.to_string()
    };
    Some(token).filter(|t| !t.trim().is_empty())
}

pub fn clear_token() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_token() {
        assert_eq!(decode_stored_token("eyJhbGci.x.y").as_deref(), Some("eyJhbGci.x.y"));
        assert_eq!(decode_stored_token(""), None);
    }

    #[test]
    fn test_json_quoted_token() {
        assert_eq!(
            decode_stored_token(r#""eyJhbGci.x.y""#).as_deref(),
            Some("eyJhbGci.x.y")
        );
        assert_eq!(decode_stored_token(r#""""#), None);
        assert_eq!(decode_stored_token(r#""unterminated"#), None);
    }
}
