use vacuum_client::{DEFAULT_API_VERSION, Error, ProductAdvertising, Response};
use vacuum_request::{LookupRequest, Parameters, SearchQuery};
use vacuum_testkit::RecordingTransport;

#[tokio::test]
async fn lookup_dispatches_exactly_once() {
	let client = ProductAdvertising::new(&vacuum_testkit::config(), RecordingTransport::ok());
	let request = LookupRequest::new(1..=10_u32).param("foo", "bar");
	let response = client.look_up(&request).await.expect("Lookup failed.");

	assert_eq!(response.status(), 200);
	assert_eq!(client.transport().dispatch_count(), 1);

	let bag = client.transport().last().expect("Missing dispatched bag.");

	assert_eq!(bag.get("ItemId"), Some("1,2,3,4,5,6,7,8,9,10"));
	assert_eq!(bag.get("Foo"), Some("bar"));
	assert_eq!(bag.get("Operation"), Some("ItemLookup"));
	assert_eq!(bag.get("Service"), Some("AWSECommerceService"));
	assert_eq!(bag.get("AWSAccessKeyId"), Some("key"));
	assert_eq!(bag.get("AssociateTag"), Some("tag"));
	assert_eq!(bag.get("Version"), Some(DEFAULT_API_VERSION));
}

#[tokio::test]
async fn multi_batch_lookup_overrides_version() {
	let client = ProductAdvertising::new(&vacuum_testkit::config(), RecordingTransport::ok());
	let request = LookupRequest::new(1..=20_u32).param("foo", "bar").version("baz");

	client.look_up(&request).await.expect("Lookup failed.");

	let bag = client.transport().last().expect("Missing dispatched bag.");

	assert_eq!(bag.get("ItemLookup.Shared.Foo"), Some("bar"));
	assert_eq!(bag.get("Version"), Some("baz"));
	assert!(!bag.contains_key("ItemLookup.Shared.Version"));
}

#[tokio::test]
async fn invalid_lookup_never_dispatches() {
	let client = ProductAdvertising::new(&vacuum_testkit::config(), RecordingTransport::ok());

	for request in [LookupRequest::default(), LookupRequest::new(1..=21_u32)] {
		let err = client.look_up(&request).await.expect_err("Expected validation error.");

		assert!(matches!(err, Error::Request(vacuum_request::Error::InvalidArgument { .. })));
	}

	assert_eq!(client.transport().dispatch_count(), 0);
}

#[tokio::test]
async fn search_dispatches_keyword_and_parameter_queries() {
	let client = ProductAdvertising::new(&vacuum_testkit::config(), RecordingTransport::ok());

	client.search("foo", &SearchQuery::keywords("bar")).await.expect("Search failed.");
	client
		.search("foo", &SearchQuery::from(Parameters::new().with("bar", "baz")))
		.await
		.expect("Search failed.");

	let dispatched = client.transport().dispatched();

	assert_eq!(dispatched.len(), 2);
	assert_eq!(dispatched[0].get("Keywords"), Some("bar"));
	assert_eq!(dispatched[0].get("SearchIndex"), Some("Foo"));
	assert_eq!(dispatched[1].get("Bar"), Some("baz"));
	assert_eq!(dispatched[1].get("SearchIndex"), Some("Foo"));
	assert_eq!(dispatched[1].get("Operation"), Some("ItemSearch"));
}

#[tokio::test]
async fn transport_errors_pass_through() {
	let client = ProductAdvertising::new(
		&vacuum_testkit::config(),
		RecordingTransport::failing("connection reset"),
	);
	let err = client
		.look_up(&LookupRequest::new(["B000"]))
		.await
		.expect_err("Expected transport error.");

	assert!(matches!(&err, Error::Transport { message } if message == "connection reset"));
	assert_eq!(client.transport().dispatch_count(), 1);
}

#[tokio::test]
async fn non_success_status_is_returned_as_response() {
	let client = ProductAdvertising::new(
		&vacuum_testkit::config(),
		RecordingTransport::new(Response::new(503, "<Error/>")),
	);
	let response = client.search("books", &SearchQuery::keywords("rust")).await.expect("Search failed.");

	assert!(!response.is_success());
	assert_eq!(response.body(), "<Error/>");
}

#[test]
fn configured_version_replaces_default() {
	let mut cfg = vacuum_testkit::config();

	cfg.endpoint.version = Some("2013-08-01".to_string());

	let client = ProductAdvertising::new(&cfg, RecordingTransport::ok());

	assert_eq!(client.defaults().get("Version"), Some("2013-08-01"));
	assert_eq!(client.credentials().secret, "secret");
}

#[test]
fn builds_client_from_config() {
	let client =
		ProductAdvertising::from_config(&vacuum_testkit::config()).expect("Failed to build client.");

	assert_eq!(client.transport().url(), "https://ecs.amazonaws.com/onca/xml");
}
