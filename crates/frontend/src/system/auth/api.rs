use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::api::http::{self, Method};
use crate::shared::api::ApiError;

/// Login with user name and password
pub async fn login(login: String, password: String) -> Result<LoginResponse, ApiError> {
    let request = LoginRequest { login, password };
    http::send_json(Method::Post, "/auth/login", &request).await
}
