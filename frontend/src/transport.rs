use gloo_net::http::Request;
use log::{error, info, warn};
use serde::Serialize;
use wasm_bindgen_futures::spawn_local;

use crate::config;
use crate::content::ProjectType;

/// The four values the contact form hands to the submission backend.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub project_type: ProjectType,
    pub message: String,
}

#[derive(Debug, PartialEq)]
enum Delivery {
    Accepted,
    Rejected(u16),
}

/// Fire-and-forget: the outcome is logged, never shown to the visitor.
pub fn submit_contact(submission: ContactSubmission) {
    let Some(endpoint) = config::contact_endpoint() else {
        info!(
            "No contact endpoint configured, dropping {:?} enquiry",
            submission.project_type.label()
        );
        return;
    };

    spawn_local(async move {
        match deliver(endpoint, &submission).await {
            Ok(Delivery::Accepted) => info!("Contact enquiry delivered"),
            Ok(Delivery::Rejected(status)) => warn!("Contact endpoint rejected enquiry: {}", status),
            Err(e) => error!("Failed to send contact enquiry: {}", e),
        }
    });
}

async fn deliver(endpoint: &str, submission: &ContactSubmission) -> Result<Delivery, gloo_net::Error> {
    let response = Request::post(endpoint).json(submission)?.send().await?;
    if response.ok() {
        Ok(Delivery::Accepted)
    } else {
        Ok(Delivery::Rejected(response.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn submission_uses_camel_case_and_project_label() {
        let submission = ContactSubmission {
            name: "John Doe".to_string(),
            email: "john@company.com".to_string(),
            project_type: ProjectType::Branding,
            message: "We want to dominate the market...".to_string(),
        };

        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            value,
            json!({
                "name": "John Doe",
                "email": "john@company.com",
                "projectType": "Branding Identity",
                "message": "We want to dominate the market...",
            })
        );
    }
}
