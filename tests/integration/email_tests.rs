//! Email delivery integration tests
//!
//! Alerts go through the real lettre transport to an SMTP server running in
//! the test process.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{RECIPIENT, SENDER};
    use crate::common::{ConfigFactory, FakeSmtpServer};
    use site_monitor::Monitor;
    use site_monitor::monitoring::alerts::Alert;
    use site_monitor::monitoring::{AlertDispatcher, EmailChannel, NotificationChannel};
    use std::sync::Arc;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn channel_for(server: &FakeSmtpServer) -> EmailChannel {
        let config = ConfigFactory::with_local_relay(&["https://a.test"], server.port());
        EmailChannel::new(config.smtp()).unwrap()
    }

    #[tokio::test]
    async fn test_alert_is_delivered() {
        let server = FakeSmtpServer::start().await;
        let channel = channel_for(&server);
        let alert = Alert::new(
            RECIPIENT,
            "Website Monitor Alert",
            "Error! Url [https://a.test] is down, returned status code [503]",
        );

        channel.send(&alert).await.unwrap();

        let mails = server.mails();
        assert_eq!(mails.len(), 1);
        assert_eq!(mails[0].mail_from, format!("<{}>", SENDER));
        assert_eq!(mails[0].rcpt_to, vec![format!("<{}>", RECIPIENT)]);
        assert!(mails[0].data.contains("Subject: Website Monitor Alert"));
        assert!(mails[0].data.contains("https://a.test"));
        assert!(mails[0].data.contains("503"));
    }

    #[tokio::test]
    async fn test_rejected_recipient_is_an_error() {
        let server = FakeSmtpServer::start_rejecting().await;
        let channel = channel_for(&server);
        let alert = Alert::new(RECIPIENT, "subject", "body");

        assert!(channel.send(&alert).await.is_err());
        assert!(server.mails().is_empty());
    }

    #[tokio::test]
    async fn test_dispatcher_swallows_rejection() {
        let server = FakeSmtpServer::start_rejecting().await;
        let dispatcher = AlertDispatcher::new(Arc::new(channel_for(&server)), "subject");

        dispatcher.send_alert(RECIPIENT, "body").await;
        dispatcher.send_alert(RECIPIENT, "body").await;

        let stats = dispatcher.stats();
        assert_eq!(stats.sent, 0);
        assert_eq!(stats.failed, 2);
    }

    #[tokio::test]
    async fn test_unreachable_relay_does_not_stop_cycle() {
        // Reserve a port, then free it so nothing is listening there
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };

        let endpoints = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&endpoints)
            .await;
        let url = format!("{}/health", endpoints.uri());

        let config = ConfigFactory::with_local_relay(&[url.as_str()], port);
        let monitor = Monitor::new(&config).unwrap();

        let report = monitor.run_once().await;
        assert_eq!(report.failures().len(), 1);
        assert_eq!(monitor.runner().dispatcher().stats().failed, 1);
    }

    #[tokio::test]
    async fn test_failing_cycle_emails_the_operator() {
        let smtp = FakeSmtpServer::start().await;
        let endpoints = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&endpoints)
            .await;
        let url = format!("{}/status", endpoints.uri());

        let config = ConfigFactory::with_local_relay(&[url.as_str()], smtp.port());
        let monitor = Monitor::new(&config).unwrap();

        monitor.run_once().await;

        let mails = smtp.mails();
        assert_eq!(mails.len(), 1);
        assert_eq!(mails[0].rcpt_to, vec![format!("<{}>", RECIPIENT)]);
        assert!(mails[0].data.contains("Subject: Website Monitor Alert"));
        assert_eq!(monitor.runner().dispatcher().stats().sent, 1);
    }
}
