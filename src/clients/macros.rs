/// Generates a client method that sends a request variant with a fresh
/// oneshot responder and awaits the reply.
///
/// A closed channel or a dropped responder becomes
/// [`OrderError::ActorCommunication`](crate::error::OrderError::ActorCommunication).
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident) => {
        impl $client {
            #[tracing::instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $crate::error::OrderError> {
                tracing::debug!("Sending request");
                let (respond_to, response) = tokio::sync::oneshot::channel();
                self.sender
                    .send($request::$variant {
                        $($param,)*
                        respond_to,
                    })
                    .await
                    .map_err(|_| $crate::error::OrderError::ActorCommunication("Service closed".to_string()))?;

                response
                    .await
                    .map_err(|_| $crate::error::OrderError::ActorCommunication("Service dropped request".to_string()))
            }
        }
    };
}

pub(crate) use client_method;
