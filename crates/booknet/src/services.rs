//! Per-resource service façades
//!
//! Each operation comes in two shapes. `op_response` returns the full
//! [`Response`](crate::rest::Response) envelope. `op` awaits the same call and
//! hands back only the decoded body, so both shapes succeed and fail together.
//! Every invocation is one fresh HTTP request: nothing is cached, shared or
//! retried.

/// Declare a service façade over a set of [`RestRequest`](crate::rest::RestRequest) operations.
macro_rules! rest_service {
    (
        $(#[$meta:meta])*
        $name:ident {
            $(
                $op:ident / $op_response:ident => $path_const:ident : $params:ty;
            )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name<C> {
            base: $crate::client::BaseService<C>,
        }

        impl<C> $name<C> {
            $(
                #[doc = concat!("Path template of `", stringify!($op), "`, relative to the API root.")]
                pub const $path_const: &'static str =
                    <$params as $crate::rest::RestRequest>::PATH;
            )*
        }

        impl<C: $crate::http_client::HttpClient> $name<C> {
            /// Create the service for the API described by `config`, sending through `http`.
            pub fn new(config: $crate::client::ApiConfiguration, http: C) -> Self {
                Self::from_base($crate::client::BaseService::new(config, http))
            }

            /// Create the service on top of an existing base.
            pub fn from_base(base: $crate::client::BaseService<C>) -> Self {
                Self { base }
            }

            /// Shared configuration and transport.
            pub fn base(&self) -> &$crate::client::BaseService<C> {
                &self.base
            }

            $(
                #[doc = concat!("Send `", stringify!($op), "` and return the full response envelope.")]
                pub async fn $op_response(
                    &self,
                    params: &$params,
                    opts: ::core::option::Option<$crate::rest::CallOptions>,
                ) -> $crate::error::ClientResult<$crate::rest::RestResponse<$params>> {
                    self.base.call(opts).send(params).await
                }

                #[doc = concat!("Send `", stringify!($op), "` and return only the decoded body.")]
                pub async fn $op(
                    &self,
                    params: &$params,
                    opts: ::core::option::Option<$crate::rest::CallOptions>,
                ) -> $crate::error::ClientResult<
                    <<$params as $crate::rest::RestRequest>::Response as $crate::rest::RestResp>::Output,
                > {
                    Ok(self.$op_response(params, opts).await?.into_body())
                }
            )*
        }
    };
}

mod book;
mod feedback;

pub use book::BookService;
pub use feedback::FeedbackService;
