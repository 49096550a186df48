//! Spin HTTP entry point.

use std::rc::Rc;

use futures::SinkExt;
use spin_sdk::http::{Fields, IncomingRequest, OutgoingResponse, ResponseOutparam};
use spin_sdk::http_component;
use storefront_data::HttpCommerceClient;
use storefront_locale::Cache;
use storefront_observability::{init_tracing, LogFormat, RequestId, RequestLogger};
use tracing::Instrument;

use crate::gateway::{bad_request, extension_method, internal_error};
use crate::Gateway;

const CONFIG: &str = include_str!("../storefront.toml");
const REQUEST_ID_HEADER: &str = "x-request-id";

#[http_component]
async fn handle(req: IncomingRequest, response_out: ResponseOutparam) {
    init_tracing(LogFormat::from_env());

    let path = req.path_with_query().unwrap_or_else(|| "/".to_string());
    let headers = req.headers().entries();
    let request_id = headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(REQUEST_ID_HEADER))
        .and_then(|(_, value)| std::str::from_utf8(value).ok())
        .map(RequestId::from_string)
        .unwrap_or_else(RequestId::generate);

    let logger = RequestLogger::new(request_id, &path);
    let span = logger.span().clone();

    async move {
        tracing::info!("request started");

        let response = match into_http_request(&req, &path, &headers) {
            Ok(request) => match build_gateway() {
                Ok(gateway) => gateway.handle(&request).await,
                Err(e) => {
                    tracing::error!(error = %format_args!("{e:#}"), "gateway unavailable");
                    internal_error()
                }
            },
            Err(e) => {
                tracing::warn!(error = %format_args!("{e:#}"), "malformed request");
                bad_request()
            }
        };

        tracing::info!(
            status = response.status().as_u16(),
            elapsed_us = logger.elapsed_us(),
            "request completed"
        );

        if let Err(e) = write_response(response, logger.request_id(), response_out).await {
            tracing::error!(error = %format_args!("{e:#}"), "failed to write response");
        }
    }
    .instrument(span)
    .await
}

fn build_gateway() -> anyhow::Result<Gateway> {
    let cache = Cache::open_default()?;
    let gateway = Gateway::from_toml(CONFIG, cache)?;

    Ok(match gateway.config().commerce.clone() {
        Some(commerce) => gateway.with_client(Rc::new(HttpCommerceClient::from_config(&commerce))),
        None => gateway,
    })
}

fn into_http_request(
    req: &IncomingRequest,
    path: &str,
    headers: &[(String, Vec<u8>)],
) -> anyhow::Result<http::Request<()>> {
    let mut builder = http::Request::builder().method(method(req)?).uri(path);
    for (name, value) in headers {
        builder = builder.header(name.as_str(), value.as_slice());
    }
    Ok(builder.body(())?)
}

fn method(req: &IncomingRequest) -> anyhow::Result<http::Method> {
    use spin_sdk::http::Method;

    Ok(match req.method() {
        Method::Get => http::Method::GET,
        Method::Head => http::Method::HEAD,
        Method::Post => http::Method::POST,
        Method::Put => http::Method::PUT,
        Method::Delete => http::Method::DELETE,
        Method::Patch => http::Method::PATCH,
        Method::Options => http::Method::OPTIONS,
        Method::Connect => http::Method::CONNECT,
        Method::Trace => http::Method::TRACE,
        Method::Other(other) => extension_method(&other)?,
    })
}

async fn write_response(
    response: http::Response<String>,
    request_id: &RequestId,
    response_out: ResponseOutparam,
) -> anyhow::Result<()> {
    let mut header_list: Vec<(String, Vec<u8>)> = response
        .headers()
        .iter()
        .map(|(name, value)| (name.as_str().to_string(), value.as_bytes().to_vec()))
        .collect();
    header_list.push((
        REQUEST_ID_HEADER.to_string(),
        request_id.as_str().as_bytes().to_vec(),
    ));

    let headers = Fields::from_list(&header_list)
        .map_err(|e| anyhow::anyhow!("invalid response headers: {e:?}"))?;
    let outgoing = OutgoingResponse::new(headers);
    outgoing
        .set_status_code(response.status().as_u16())
        .map_err(|()| anyhow::anyhow!("invalid status code"))?;

    let mut body = outgoing.take_body();
    response_out.set(outgoing);

    let bytes = response.into_body().into_bytes();
    if !bytes.is_empty() {
        body.send(bytes)
            .await
            .map_err(|e| anyhow::anyhow!("failed to write body: {e:?}"))?;
    }
    Ok(())
}
