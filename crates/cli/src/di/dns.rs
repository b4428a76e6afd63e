use mockdns_application::services::{QueryLogger, RecordStore};
use mockdns_application::use_cases::{HandleDnsQueryUseCase, ProxyForwarder};
use mockdns_domain::Config;
use mockdns_infrastructure::dns::UpstreamClient;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub struct DnsServices {
    pub handler_use_case: Arc<HandleDnsQueryUseCase>,
}

impl DnsServices {
    pub fn new(config: &Config, store: RecordStore, upstreams: Vec<SocketAddr>) -> Self {
        let store = Arc::new(store);
        let forwarder = Self::build_forwarder(config, upstreams);
        let logger = QueryLogger::new(config.logging.verbose);

        info!(
            domains = store.len(),
            forwarding = forwarder.is_enabled(),
            verbose = logger.is_verbose(),
            "DNS services initialized"
        );

        let handler_use_case = Arc::new(HandleDnsQueryUseCase::new(
            store,
            forwarder,
            logger,
        ));

        Self { handler_use_case }
    }

    fn build_forwarder(config: &Config, upstreams: Vec<SocketAddr>) -> ProxyForwarder {
        if !config.proxy.enabled {
            return ProxyForwarder::disabled();
        }

        let client = UpstreamClient::new(Duration::from_millis(config.proxy.timeout_ms));
        ProxyForwarder::new(upstreams, Arc::new(client))
    }
}
