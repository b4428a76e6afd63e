use super::forward_query::ProxyForwarder;
use super::resolve_local::QueryResolver;
use crate::services::{QueryLogger, RecordStore};
use hickory_proto::op::{Message, MessageType, ResponseCode};
use mockdns_domain::{QueryOutcome, QueryRoute};
use std::sync::Arc;
use tracing::debug;

/// Result of handling one query: the reply plus how it was produced.
#[derive(Debug, Clone)]
pub struct QueryResolution {
    pub route: QueryRoute,
    pub outcome: QueryOutcome,
    pub response: Message,
}

/// Dispatches a query to the record store or to the upstream forwarder.
pub struct HandleDnsQueryUseCase {
    store: Arc<RecordStore>,
    forwarder: ProxyForwarder,
    logger: QueryLogger,
}

impl HandleDnsQueryUseCase {
    pub fn new(store: Arc<RecordStore>, forwarder: ProxyForwarder, logger: QueryLogger) -> Self {
        Self {
            store,
            forwarder,
            logger,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn forwarding_enabled(&self) -> bool {
        self.forwarder.is_enabled()
    }

    /// Routing uses the first question's name, like a zone-keyed serve mux.
    pub async fn execute(&self, request: &Message) -> QueryResolution {
        let zone = request
            .queries()
            .first()
            .and_then(|q| self.store.find_zone(&q.name().to_ascii()));

        let resolution = match zone {
            Some(set) => {
                let sections = QueryResolver::resolve(request.queries(), set);
                debug!(
                    zone = %set.fqdn(),
                    answers = sections.answers.len(),
                    authority = sections.authority.len(),
                    additionals = sections.additionals.len(),
                    "Answering from record store"
                );

                let mut response = reply_to(request);
                response.add_answers(sections.answers);
                response.add_name_servers(sections.authority);
                response.add_additionals(sections.additionals);

                QueryResolution {
                    route: QueryRoute::Local,
                    outcome: QueryOutcome::Success,
                    response,
                }
            }
            None => {
                let route = QueryRoute::unmatched(self.forwarder.is_enabled());
                match self.forwarder.forward(request).await {
                    Ok(response) => QueryResolution {
                        route,
                        outcome: QueryOutcome::Success,
                        response,
                    },
                    Err(e) => {
                        debug!(error = %e, route = %route, "Replying SERVFAIL");
                        QueryResolution {
                            route,
                            outcome: QueryOutcome::Failure,
                            response: server_failure(request),
                        }
                    }
                }
            }
        };

        self.logger
            .log(request.queries(), resolution.route, resolution.outcome);

        resolution
    }
}

/// An empty reply mirroring the request's id, opcode, flags and questions.
pub fn reply_to(request: &Message) -> Message {
    let mut response = Message::new(request.id(), MessageType::Response, request.op_code());
    response.set_recursion_desired(request.recursion_desired());
    response.set_checking_disabled(request.checking_disabled());
    response.add_queries(request.queries().iter().cloned());
    response
}

pub fn server_failure(request: &Message) -> Message {
    let mut response = reply_to(request);
    response.set_response_code(ResponseCode::ServFail);
    response
}
