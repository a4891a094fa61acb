use rumqttc::{MqttOptions, Transport};

use crate::config::BrokerConfig;

/// Client id sent to the broker, optionally with a random suffix.
pub fn client_id(config: &BrokerConfig) -> String {
    if config.unique_client_id {
        let suffix = uuid::Uuid::new_v4().simple().to_string();
        format!("{}-{}", config.client_id, &suffix[..8])
    } else {
        config.client_id.clone()
    }
}

/// Websocket transports take a full URL; TCP and TLS take the bare host.
pub fn broker_address(config: &BrokerConfig) -> String {
    if config.use_websocket {
        let scheme = if config.use_tls { "wss" } else { "ws" };
        format!("{}://{}:{}{}", scheme, config.host, config.port, config.path)
    } else {
        config.host.clone()
    }
}

pub fn transport(config: &BrokerConfig) -> Transport {
    match (config.use_websocket, config.use_tls) {
        (true, true) => Transport::wss_with_default_config(),
        (true, false) => Transport::Ws,
        (false, true) => Transport::tls_with_default_config(),
        (false, false) => Transport::Tcp,
    }
}

pub fn build_options(config: &BrokerConfig) -> MqttOptions {
    let mut options = MqttOptions::new(client_id(config), broker_address(config), config.port);
    options.set_keep_alive(config.keep_alive());
    options.set_transport(transport(config));
    options
}
