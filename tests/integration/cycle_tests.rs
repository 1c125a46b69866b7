//! Cycle integration tests
//!
//! Real `Prober` against `wiremock` endpoints, alerts captured by a
//! recording channel.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::RECIPIENT;
    use crate::common::{ConfigFactory, RecordingChannel};
    use site_monitor::Monitor;
    use site_monitor::monitoring::{AlertDispatcher, CycleRunner, Prober};
    use std::sync::Arc;
    use std::time::{Duration, Instant};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn endpoint(server: &MockServer, route: &str, response: ResponseTemplate) -> String {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(response)
            .mount(server)
            .await;
        format!("{}{}", server.uri(), route)
    }

    fn runner(urls: Vec<String>, timeout: Duration) -> (CycleRunner, Arc<RecordingChannel>) {
        let channel = Arc::new(RecordingChannel::new());
        let prober = Arc::new(Prober::new(timeout, "site-monitor-tests").unwrap());
        let dispatcher = AlertDispatcher::new(channel.clone(), "Website Monitor Alert");
        (CycleRunner::new(urls, prober, dispatcher, RECIPIENT), channel)
    }

    #[tokio::test]
    async fn test_all_endpoints_up_sends_nothing() {
        let server = MockServer::start().await;
        let a = endpoint(&server, "/a", ResponseTemplate::new(200)).await;
        let b = endpoint(&server, "/b", ResponseTemplate::new(200)).await;
        let (runner, channel) = runner(vec![a, b], Duration::from_secs(2));

        let report = runner.run_cycle().await;

        assert_eq!(report.probed(), 2);
        assert!(report.is_empty());
        assert_eq!(channel.count(), 0);
    }

    #[tokio::test]
    async fn test_one_endpoint_down_sends_one_alert() {
        let server = MockServer::start().await;
        let a = endpoint(&server, "/a", ResponseTemplate::new(503)).await;
        let b = endpoint(&server, "/b", ResponseTemplate::new(200)).await;
        let (runner, channel) = runner(vec![a.clone(), b.clone()], Duration::from_secs(2));

        runner.run_cycle().await;

        let alerts = channel.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].recipient, RECIPIENT);
        assert_eq!(alerts[0].subject, "Website Monitor Alert");
        assert!(alerts[0].body.contains(&a));
        assert!(alerts[0].body.contains("503"));
        assert!(!alerts[0].body.contains(&b));
    }

    #[tokio::test]
    async fn test_hanging_endpoint_times_out_without_blocking_cycle() {
        let server = MockServer::start().await;
        let slow = endpoint(
            &server,
            "/slow",
            ResponseTemplate::new(200).set_delay(Duration::from_secs(5)),
        )
        .await;
        let fast = endpoint(&server, "/fast", ResponseTemplate::new(200)).await;
        let (runner, channel) = runner(vec![slow.clone(), fast], Duration::from_millis(500));

        let started = Instant::now();
        let report = runner.run_cycle().await;

        assert!(started.elapsed() < Duration::from_secs(3));
        assert_eq!(report.failures().len(), 1);

        let alerts = channel.alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].body.contains(&slow));
        assert!(alerts[0].body.contains("timed out"));
    }

    #[tokio::test]
    async fn test_recovery_then_failure_across_cycles() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/flaky"))
            .respond_with(ResponseTemplate::new(200))
            .up_to_n_times(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/flaky"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
        let flaky = format!("{}/flaky", server.uri());
        let (runner, channel) = runner(vec![flaky.clone()], Duration::from_secs(2));

        runner.run_cycle().await;
        assert_eq!(channel.count(), 0);

        runner.run_cycle().await;
        let alerts = channel.alerts();
        assert_eq!(alerts.len(), 1);
        assert!(alerts[0].body.contains(&flaky));
        assert!(alerts[0].body.contains("500"));
    }

    #[tokio::test]
    async fn test_mixed_failures_share_one_alert() {
        let server = MockServer::start().await;
        let down = endpoint(&server, "/down", ResponseTemplate::new(500)).await;
        let missing = endpoint(&server, "/missing", ResponseTemplate::new(404)).await;
        let up = endpoint(&server, "/up", ResponseTemplate::new(200)).await;
        // Nothing listens on port 9 of the loopback interface
        let refused = "http://127.0.0.1:9/".to_string();
        let (runner, channel) = runner(
            vec![down.clone(), missing.clone(), up, refused.clone()],
            Duration::from_secs(2),
        );

        let report = runner.run_cycle().await;

        assert_eq!(report.probed(), 4);
        assert_eq!(report.failures().len(), 3);

        let alerts = channel.alerts();
        assert_eq!(alerts.len(), 1);
        assert_eq!(alerts[0].body.lines().count(), 3);
        for url in [&down, &missing, &refused] {
            assert!(alerts[0].body.contains(url.as_str()), "missing {}", url);
        }
    }

    #[tokio::test]
    async fn test_monitor_from_config_runs_one_cycle() {
        let server = MockServer::start().await;
        let down = endpoint(&server, "/down", ResponseTemplate::new(502)).await;
        let config = ConfigFactory::with_urls(&[down.as_str()]);
        let channel = Arc::new(RecordingChannel::new());

        let monitor = Monitor::with_channel(&config, channel.clone()).unwrap();
        let report = monitor.run_once().await;

        assert_eq!(report.failures().len(), 1);
        assert_eq!(channel.count(), 1);
    }
}
