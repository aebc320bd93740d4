use std::time::Duration;

use reqwest::{Client, Response, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::error::{ApiError, ApiResult};
use crate::model::{RandomUserRecord, User, UserPatch};

const RANDOM_USERS_PATH: &str = "/api/random-users";
const USERS_PATH: &str = "/api/users";

/// HTTP client for the user-directory backend.
///
/// One call maps to one request: no retry, no backoff.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client for `base_url`. `timeout` of `None` leaves requests unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> ApiResult<Self> {
        let base_url = base_url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ApiError::Setup(format!(
                "base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }
        Url::parse(&base_url).map_err(|e| ApiError::Setup(e.to_string()))?;

        let mut builder = Client::builder().user_agent(format!(
            "userdeck/{}",
            env!("CARGO_PKG_VERSION")
        ));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ApiError::Setup(e.to_string()))?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/random-users`, converted to [`User`]s keyed by `login.uuid`.
    pub async fn random_users(&self) -> ApiResult<Vec<User>> {
        let url = self.url(RANDOM_USERS_PATH, None)?;
        let records: Vec<RandomUserRecord> = self.get_json(url).await?;
        Ok(records.into_iter().map(User::from).collect())
    }

    /// `GET /api/users`.
    pub async fn list_users(&self) -> ApiResult<Vec<User>> {
        let url = self.url(USERS_PATH, None)?;
        self.get_json(url).await
    }

    /// `GET /api/users/:id`.
    pub async fn get_user(&self, id: &str) -> ApiResult<User> {
        let url = self.url(USERS_PATH, Some(id))?;
        self.get_json(url).await
    }

    /// `POST /api/users`. Returns the backend's canonical record.
    pub async fn create_user(&self, user: &User) -> ApiResult<User> {
        let url = self.url(USERS_PATH, None)?;
        debug!(url = %url, id = %user.id, "POST user");
        let response = self
            .http
            .post(url.clone())
            .json(user)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        decode(check(response, &url).await?, &url).await
    }

    /// `PATCH /api/users/:id`. Returns the updated record.
    pub async fn update_user(&self, id: &str, patch: &UserPatch) -> ApiResult<User> {
        let url = self.url(USERS_PATH, Some(id))?;
        debug!(url = %url, "PATCH user");
        let response = self
            .http
            .patch(url.clone())
            .json(patch)
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        decode(check(response, &url).await?, &url).await
    }

    /// `DELETE /api/users/:id`. The response body is ignored.
    pub async fn delete_user(&self, id: &str) -> ApiResult<()> {
        let url = self.url(USERS_PATH, Some(id))?;
        debug!(url = %url, "DELETE user");
        let response = self
            .http
            .delete(url.clone())
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        check(response, &url).await?;
        Ok(())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ApiResult<T> {
        debug!(url = %url, "GET");
        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .map_err(|e| transport(&url, e))?;
        decode(check(response, &url).await?, &url).await
    }

    fn url(&self, path: &str, id: Option<&str>) -> ApiResult<Url> {
        let mut url = Url::parse(&format!("{}{}", self.base_url, path))
            .map_err(|e| ApiError::Setup(e.to_string()))?;
        if let Some(id) = id {
            url.path_segments_mut()
                .map_err(|_| ApiError::Setup(format!("cannot append id to '{}'", self.base_url)))?
                .push(id);
        }
        Ok(url)
    }
}

fn transport(url: &Url, source: reqwest::Error) -> ApiError {
    ApiError::Transport {
        url: url.to_string(),
        source,
    }
}

async fn check(response: Response, url: &Url) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response.text().await.unwrap_or_default();
    Err(match status {
        StatusCode::CONFLICT => ApiError::Conflict { message },
        StatusCode::NOT_FOUND => ApiError::NotFound {
            path: url.path().to_string(),
        },
        _ => ApiError::Status {
            status: status.as_u16(),
            message,
        },
    })
}

async fn decode<T: DeserializeOwned>(response: Response, url: &Url) -> ApiResult<T> {
    response.json::<T>().await.map_err(|e| ApiError::Decode {
        url: url.to_string(),
        source: e,
    })
}
