//! Service handles and operation request builders.
//!
//! Every operation funnels into the same request pipeline; the typed service
//! handles only pick the operation table entry.

use std::collections::HashSet;

use serde_json::Value;

use crate::{input::Input, model::Paginator, types::OperationOutput};

/// Declares the async and blocking handle for one service, with one
/// snake_case method per operation.
macro_rules! service_client {
    (
        $(#[$doc:meta])*
        $name:ident, $blocking:ident, $module:ident {
            $($method:ident => $op:ident),* $(,)?
        }
    ) => {
        $(#[$doc])*
        #[cfg(feature = "async")]
        #[derive(Clone)]
        pub struct $name {
            inner: $crate::api::ServiceClient,
        }

        #[cfg(feature = "async")]
        impl $name {
            pub(crate) fn new(inner: $crate::api::ServiceClient) -> Self {
                Self { inner }
            }

            pub fn service(&self) -> &$crate::api::ServiceClient {
                &self.inner
            }

            pub fn operation(&self, name: &str) -> $crate::Result<$crate::api::OperationRequest> {
                self.inner.operation(name)
            }

            $(
                pub fn $method(&self) -> $crate::api::OperationRequest {
                    self.inner.request(&$crate::model::$module::$op)
                }
            )*
        }

        $(#[$doc])*
        #[cfg(feature = "blocking")]
        #[derive(Clone)]
        pub struct $blocking {
            inner: $crate::api::BlockingServiceClient,
        }

        #[cfg(feature = "blocking")]
        impl $blocking {
            pub(crate) fn new(inner: $crate::api::BlockingServiceClient) -> Self {
                Self { inner }
            }

            pub fn service(&self) -> &$crate::api::BlockingServiceClient {
                &self.inner
            }

            pub fn operation(
                &self,
                name: &str,
            ) -> $crate::Result<$crate::api::BlockingOperationRequest> {
                self.inner.operation(name)
            }

            $(
                pub fn $method(&self) -> $crate::api::BlockingOperationRequest {
                    self.inner.request(&$crate::model::$module::$op)
                }
            )*
        }
    };
}

#[cfg(feature = "blocking")]
mod blocking_operation;
#[cfg(feature = "async")]
mod operation;
mod services;

#[cfg(feature = "blocking")]
pub use blocking_operation::{
    BlockingOperationRequest, BlockingPager, BlockingServiceClient, Callable,
};
#[cfg(feature = "async")]
pub use operation::{OperationHandle, OperationPager, OperationRequest, ServiceClient};
pub use services::*;

/// Tokens a pager has already sent, so a service that cycles through
/// tokens ends the pager instead of looping.
#[derive(Debug, Default)]
#[cfg_attr(not(any(feature = "async", feature = "blocking")), allow(dead_code))]
pub(crate) struct SeenTokens(HashSet<String>);

#[cfg_attr(not(any(feature = "async", feature = "blocking")), allow(dead_code))]
impl SeenTokens {
    /// Continuation token of `page`, unless absent, empty or already sent.
    ///
    /// Only JSON payloads carry tokens; query-protocol pages end the pager.
    pub(crate) fn next_token(
        &mut self,
        page: &OperationOutput,
        paginator: Paginator,
        input: &Input,
    ) -> Option<String> {
        if let Some(sent) = input.get(paginator.input_token).and_then(Value::as_str) {
            self.0.insert(sent.to_owned());
        }
        let token = page.json_string_field(paginator.output_token)?;
        self.0.insert(token.clone()).then_some(token)
    }
}

#[cfg(test)]
mod tests {
    use bytes::Bytes;
    use http::{HeaderMap, StatusCode};

    use super::*;

    fn page(body: &'static str) -> OperationOutput {
        OperationOutput::new(StatusCode::OK, HeaderMap::new(), Bytes::from_static(body.as_bytes()))
    }

    #[test]
    fn next_token_follows_output_field() {
        let mut input = Input::new();
        let mut seen = SeenTokens::default();
        assert_eq!(
            seen.next_token(&page(r#"{"nextToken":"t1"}"#), Paginator::next_token(), &input)
                .as_deref(),
            Some("t1")
        );

        input.set("nextToken", "t1");
        assert!(
            seen.next_token(&page(r#"{"nextToken":"t1"}"#), Paginator::next_token(), &input)
                .is_none()
        );
        assert!(seen.next_token(&page("{}"), Paginator::next_token(), &input).is_none());
    }

    #[test]
    fn cycling_tokens_end_the_pager() {
        let paginator = Paginator::next_token();
        let mut seen = SeenTokens::default();
        let mut input = Input::new();

        for (body, expected) in [
            (r#"{"nextToken":"A"}"#, Some("A")),
            (r#"{"nextToken":"B"}"#, Some("B")),
            (r#"{"nextToken":"A"}"#, None),
        ] {
            let token = seen.next_token(&page(body), paginator, &input);
            assert_eq!(token.as_deref(), expected);
            if let Some(token) = token {
                input.set("nextToken", token);
            }
        }
    }

    #[test]
    fn caller_supplied_start_token_is_not_revisited() {
        let mut input = Input::new();
        input.set("nextToken", "start");
        let mut seen = SeenTokens::default();
        assert!(
            seen.next_token(&page(r#"{"nextToken":"start"}"#), Paginator::next_token(), &input)
                .is_none()
        );
    }

    #[test]
    fn next_token_uses_pascal_case_names() {
        let input = Input::new();
        assert_eq!(
            SeenTokens::default()
                .next_token(
                    &page(r#"{"NextToken":"abc","Clusters":[]}"#),
                    Paginator::pascal_next_token(),
                    &input
                )
                .as_deref(),
            Some("abc")
        );
    }
}
