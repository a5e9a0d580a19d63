pub mod mock_onboard_client;

pub use mock_onboard_client::{MockOnboardClient, MockResponse};
