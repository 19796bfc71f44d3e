use gloo::net::http::Request;
use guessing_core::{ApiCall, Reply, RequestError};
use guessing_protocol::{GuessRequest, Method};
use serde::de::DeserializeOwned;

/// Talks to the game backend rooted at `base`.
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct ApiClient {
    base: String,
}

impl ApiClient {
    pub(crate) fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Performs `call` and wraps the outcome for the controller. Never fails:
    /// transport and decode problems travel inside the [`Reply`].
    pub(crate) async fn execute(self, call: ApiCall) -> Reply {
        match call {
            ApiCall::Status => Reply::Status(self.fetch(call, None).await),
            ApiCall::Guess(guess) => Reply::Guess {
                guess,
                reply: self
                    .fetch(
                        call,
                        Some(GuessRequest {
                            guess: guess.value(),
                        }),
                    )
                    .await,
            },
            ApiCall::Hint => Reply::Hint(self.fetch(call, None).await),
            ApiCall::Restart => Reply::Restart(self.fetch(call, None).await),
        }
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        call: ApiCall,
        body: Option<GuessRequest>,
    ) -> Result<T, RequestError> {
        let endpoint = call.endpoint();
        let url = endpoint.url(&self.base);
        log::debug!("{:?} {}", endpoint.method(), url);

        let builder = match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        };
        let request = match body {
            Some(body) => builder.json(&body),
            None => builder.build(),
        }
        .map_err(request_error)?;

        let response = request.send().await.map_err(request_error)?;
        // the body decides success, not the status code
        log::trace!("{} answered {}", url, response.status());
        response.json::<T>().await.map_err(request_error)
    }
}

fn request_error(err: gloo::net::Error) -> RequestError {
    match err {
        gloo::net::Error::SerdeError(err) => RequestError::Decode(err.to_string()),
        other => RequestError::Transport(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_json_is_a_decode_error() {
        let err = serde_json::from_str::<u8>("<html>").unwrap_err();
        assert!(matches!(
            request_error(gloo::net::Error::SerdeError(err)),
            RequestError::Decode(_)
        ));
    }

    #[test]
    fn everything_else_is_a_transport_error() {
        let err = gloo::net::Error::GlooError("failed to fetch".to_string());
        assert!(matches!(request_error(err), RequestError::Transport(_)));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn unreachable_backend_is_a_transport_error() {
        let reply = ApiClient::new("http://127.0.0.1:9/api")
            .execute(ApiCall::Hint)
            .await;
        assert!(matches!(reply, Reply::Hint(Err(RequestError::Transport(_)))));
    }
}
