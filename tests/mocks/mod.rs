//! In-memory stand-ins for the form-capture endpoint and the link opener.

mod mock_form_capture_client;
mod mock_link_opener;

#[allow(unused_imports)]
pub use mock_form_capture_client::MockFormCaptureClient;
#[allow(unused_imports)]
pub use mock_link_opener::MockLinkOpener;
