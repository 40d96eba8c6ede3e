//! JSON response shapes of the parse, authorship and user-query services.

use serde::Deserialize;
use viewer_core::{Payload, ResolvedUser, Source};

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed {origin:?} response: {message}")]
    Malformed { origin: Source, message: String },
    #[error("wiki api error {code}: {info}")]
    Api { code: String, info: String },
}

#[derive(Debug, Deserialize)]
struct ApiError {
    code: String,
    #[serde(default)]
    info: String,
}

#[derive(Debug, Deserialize)]
struct ParseResponse {
    parse: Option<ParsedPage>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct ParsedPage {
    pageid: u64,
    text: ParsedText,
}

#[derive(Debug, Deserialize)]
struct ParsedText {
    #[serde(rename = "*")]
    html: String,
}

#[derive(Debug, Deserialize)]
struct AuthorshipResponse {
    #[serde(default)]
    html: Option<String>,
}

#[derive(Debug, Deserialize)]
struct UserQueryResponse {
    query: Option<UserQuery>,
    error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
struct UserQuery {
    #[serde(default)]
    users: Vec<ApiUser>,
}

/// Unknown accounts come back as `{"name": "...", "missing": ""}` without an id.
#[derive(Debug, Deserialize)]
struct ApiUser {
    name: String,
    #[serde(default)]
    userid: Option<u64>,
}

/// Decodes the body returned for `source` into the matching payload.
pub fn decode_payload(source: Source, body: &[u8]) -> Result<Payload, DecodeError> {
    match source {
        Source::ParsedArticle => {
            let response: ParseResponse = parse_json(source, body)?;
            let page = required(source, response.parse, response.error, "parse")?;
            Ok(Payload::ParsedArticle {
                page_id: page.pageid,
                html: page.text.html,
            })
        }
        Source::Authorship => {
            let response: AuthorshipResponse = parse_json(source, body)?;
            Ok(Payload::Authorship {
                html: response.html,
            })
        }
        Source::UserIds => {
            let response: UserQueryResponse = parse_json(source, body)?;
            let query = required(source, response.query, response.error, "query")?;
            let users = query
                .users
                .into_iter()
                .map(|user| ResolvedUser {
                    name: user.name,
                    userid: user.userid,
                })
                .collect();
            Ok(Payload::UserIds(users))
        }
    }
}

fn parse_json<'a, T: Deserialize<'a>>(origin: Source, body: &'a [u8]) -> Result<T, DecodeError> {
    serde_json::from_slice(body).map_err(|err| DecodeError::Malformed {
        origin,
        message: err.to_string(),
    })
}

fn required<T>(
    origin: Source,
    value: Option<T>,
    error: Option<ApiError>,
    field: &str,
) -> Result<T, DecodeError> {
    if let Some(error) = error {
        return Err(DecodeError::Api {
            code: error.code,
            info: error.info,
        });
    }
    value.ok_or_else(|| DecodeError::Malformed {
        origin,
        message: format!("missing field `{field}`"),
    })
}
