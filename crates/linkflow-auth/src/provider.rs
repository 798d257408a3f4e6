//! Provider selection and profile payload mapping.

use linkflow_core::{Error, Result};
use serde::Serialize;

/// Supported identity providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Kakao,
    Naver,
}

impl ProviderKind {
    /// Namespace prefix for internal uids (`kakao_<id>` / `naver_<id>`).
    pub fn namespace(&self) -> &'static str {
        match self {
            ProviderKind::Kakao => "kakao",
            ProviderKind::Naver => "naver",
        }
    }

    pub fn token_url(&self) -> &'static str {
        match self {
            ProviderKind::Kakao => "https://kauth.kakao.com/oauth/token",
            ProviderKind::Naver => "https://nid.naver.com/oauth2.0/token",
        }
    }

    pub fn profile_url(&self) -> &'static str {
        match self {
            ProviderKind::Kakao => "https://kapi.kakao.com/v2/user/me",
            ProviderKind::Naver => "https://openapi.naver.com/v1/nid/me",
        }
    }

    /// Parse a provider's route segment.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "kakao" => Some(ProviderKind::Kakao),
            "naver" => Some(ProviderKind::Naver),
            _ => None,
        }
    }

    /// Normalize this provider's profile payload.
    pub fn map_profile(&self, payload: &serde_json::Value) -> Result<UserProfile> {
        match self {
            ProviderKind::Kakao => map_kakao_profile(payload),
            ProviderKind::Naver => map_naver_profile(payload),
        }
    }
}

/// Provider-independent view of a fetched profile.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    #[serde(skip)]
    pub provider_id: String,
    pub name: String,
    pub email: String,
    pub profile_image: String,
}

// Kakao: { id, kakao_account: { email, profile: { nickname, profile_image_url } } }
fn map_kakao_profile(payload: &serde_json::Value) -> Result<UserProfile> {
    let id = payload
        .get("id")
        .map(|v| match v {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .filter(|s| !s.is_empty() && s != "null")
        .ok_or_else(|| Error::Provider("Kakao profile has no id".to_string()))?;

    let account = &payload["kakao_account"];
    let profile = &account["profile"];

    Ok(UserProfile {
        provider_id: id,
        name: profile["nickname"].as_str().unwrap_or_default().to_string(),
        email: account["email"].as_str().unwrap_or_default().to_string(),
        profile_image: profile["profile_image_url"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
    })
}

// Naver wraps everything in "response":
// { response: { id, name | nickname, email, profile_image } }
fn map_naver_profile(payload: &serde_json::Value) -> Result<UserProfile> {
    let response = &payload["response"];
    let id = response["id"]
        .as_str()
        .filter(|s| !s.is_empty())
        .ok_or_else(|| Error::Provider("Naver profile has no id".to_string()))?;

    let name = response["name"]
        .as_str()
        .filter(|s| !s.is_empty())
        .or_else(|| response["nickname"].as_str())
        .unwrap_or_default();

    Ok(UserProfile {
        provider_id: id.to_string(),
        name: name.to_string(),
        email: response["email"].as_str().unwrap_or_default().to_string(),
        profile_image: response["profile_image"]
            .as_str()
            .unwrap_or_default()
            .to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn kakao_profile_mapping() {
        let payload = json!({
            "id": 4210342217u64,
            "kakao_account": {
                "email": "user@kakao.com",
                "profile": {
                    "nickname": "민준",
                    "profile_image_url": "https://k.kakaocdn.net/img.jpg"
                }
            }
        });

        let profile = ProviderKind::Kakao.map_profile(&payload).unwrap();
        assert_eq!(profile.provider_id, "4210342217");
        assert_eq!(profile.name, "민준");
        assert_eq!(profile.email, "user@kakao.com");
    }

    #[test]
    fn kakao_profile_without_id_is_rejected() {
        assert!(ProviderKind::Kakao.map_profile(&json!({})).is_err());
    }

    #[test]
    fn naver_profile_mapping_prefers_name_over_nickname() {
        let payload = json!({
            "response": {
                "id": "ab3X_z",
                "name": "이서연",
                "nickname": "seoyeon",
                "email": "user@naver.com",
                "profile_image": "https://phinf.net/p.png"
            }
        });

        let profile = ProviderKind::Naver.map_profile(&payload).unwrap();
        assert_eq!(profile.provider_id, "ab3X_z");
        assert_eq!(profile.name, "이서연");
    }

    #[test]
    fn naver_falls_back_to_nickname() {
        let payload = json!({
            "response": { "id": "x1", "nickname": "seoyeon" }
        });
        let profile = ProviderKind::Naver.map_profile(&payload).unwrap();
        assert_eq!(profile.name, "seoyeon");
        assert_eq!(profile.email, "");
    }

    #[test]
    fn provider_route_segments() {
        assert_eq!(ProviderKind::parse("kakao"), Some(ProviderKind::Kakao));
        assert_eq!(ProviderKind::parse("naver"), Some(ProviderKind::Naver));
        assert_eq!(ProviderKind::parse("google"), None);
    }
}
