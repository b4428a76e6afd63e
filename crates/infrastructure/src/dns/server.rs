use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use mockdns_application::use_cases::{HandleDnsQueryUseCase, QueryResolution};
use std::sync::Arc;
use tracing::{debug, error};

/// Bridges hickory-server requests to the query handling use case.
#[derive(Clone)]
pub struct MockDnsHandler {
    use_case: Arc<HandleDnsQueryUseCase>,
}

impl MockDnsHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self { use_case }
    }

    fn request_message(request: &Request, query: &hickory_proto::op::Query) -> Message {
        let header = request.header();
        let mut message = Message::new(header.id(), MessageType::Query, header.op_code());
        message.set_recursion_desired(header.recursion_desired());
        message.set_checking_disabled(header.checking_disabled());
        message.add_query(query.clone());
        message
    }
}

#[async_trait::async_trait]
impl RequestHandler for MockDnsHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = request_info.query.original();
        debug!(
            name = %query.name(),
            record_type = %query.query_type(),
            client = %request.src(),
            protocol = ?request.protocol(),
            "DNS query received"
        );

        let message = Self::request_message(request, query);
        let QueryResolution { response, .. } = self.use_case.execute(&message).await;

        let builder = MessageResponseBuilder::from_message_request(request);
        let mut header = *response.header();
        header.set_id(request.header().id());
        header.set_message_type(MessageType::Response);

        let reply = builder.build(
            header,
            response.answers().iter(),
            response.name_servers().iter(),
            &[],
            response.additionals().iter(),
        );

        match response_handle.send_response(reply).await {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to send response");
                ResponseInfo::from(*request.header())
            }
        }
    }
}

async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = *request.header();
    header.set_message_type(MessageType::Response);
    header.set_response_code(code);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
