// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! OAuth2 client-credentials authentication.
//!
//! `client_id` and `client_secret` are read from the request body, sent
//! either as `application/x-www-form-urlencoded` fields or as a JSON object.
//! Any other content type is rejected before the body is looked at.

use serde::Deserialize;

use super::{
    credentials::Credential, AuthError, AuthOutcome, AuthRequest, AuthenticationScheme, Principal,
    SchemeName,
};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";
const JSON_CONTENT_TYPE: &str = "application/json";

/// Shape of the JSON body. Unknown keys are ignored.
#[derive(Debug, Default, Deserialize)]
struct ClientCredentialsBody {
    #[serde(default)]
    client_id: Option<String>,
    #[serde(default)]
    client_secret: Option<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ClientCredentialsScheme;

impl ClientCredentialsScheme {
    fn extract(request: &AuthRequest<'_>) -> Result<Credential, AuthError> {
        let content_type = request
            .content_type()
            .ok_or_else(|| AuthError::missing("Invalid client credentials"))?
            .to_ascii_lowercase();
        let body = request
            .body
            .ok_or_else(|| AuthError::malformed("Request body could not be read"))?;

        let body = if content_type.contains(FORM_CONTENT_TYPE) {
            Self::from_form(body)
        } else if content_type.contains(JSON_CONTENT_TYPE) {
            Self::from_json(body)?
        } else {
            return Err(AuthError::malformed("Unsupported content type for client credentials"));
        };

        match (body.client_id, body.client_secret) {
            (Some(client_id), Some(client_secret))
                if !client_id.trim().is_empty() && !client_secret.trim().is_empty() =>
            {
                Ok(Credential::ClientCredentials {
                    client_id,
                    client_secret,
                })
            }
            _ => Err(AuthError::missing("Invalid client credentials")),
        }
    }

    fn from_form(body: &[u8]) -> ClientCredentialsBody {
        let mut fields = ClientCredentialsBody::default();
        for (key, value) in url::form_urlencoded::parse(body) {
            match key.as_ref() {
                "client_id" if fields.client_id.is_none() => {
                    fields.client_id = Some(value.into_owned())
                }
                "client_secret" if fields.client_secret.is_none() => {
                    fields.client_secret = Some(value.into_owned())
                }
                _ => {}
            }
        }
        fields
    }

    fn from_json(body: &[u8]) -> Result<ClientCredentialsBody, AuthError> {
        if body.is_empty() {
            return Ok(ClientCredentialsBody::default());
        }
        serde_json::from_slice(body)
            .map_err(|_| AuthError::malformed("Client credentials body is not a JSON object"))
    }
}

impl AuthenticationScheme for ClientCredentialsScheme {
    fn name(&self) -> SchemeName {
        SchemeName::ClientCredentials
    }

    fn authenticate(&self, request: &AuthRequest<'_>) -> AuthOutcome {
        Self::extract(request)
            .and_then(|credential| match credential {
                Credential::ClientCredentials { ref client_id, .. } if credential.is_known() => {
                    Ok(Principal::new(client_id.clone(), SchemeName::ClientCredentials))
                }
                _ => Err(AuthError::invalid("Invalid client credentials")),
            })
            .into()
    }
}
