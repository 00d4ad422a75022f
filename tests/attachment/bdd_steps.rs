//! BDD step definitions for attachment behaviour.

use ec2_model::{Attachment, AttachmentStatus, NaturalOrder};
use rstest_bdd_macros::{given, then, when};

use super::test_helpers::{AttachmentContext, attach_time, scenario_region};

#[derive(Debug, thiserror::Error)]
pub enum StepError {
    #[error("assertion failed: {0}")]
    Assertion(String),
}

#[given(
    "an attachment of volume \"{volume}\" to instance \"{instance}\" at \"{device}\" with status \"{status}\""
)]
fn timed_attachment(
    attachment_context: &AttachmentContext,
    volume: String,
    instance: String,
    device: String,
    status: String,
) -> Result<(), StepError> {
    let parsed = AttachmentStatus::from_token(&status)
        .map_err(|err| StepError::Assertion(err.to_string()))?;
    let attachment = Attachment::builder()
        .region(scenario_region())
        .volume_id(volume)
        .instance_id(instance)
        .device(device)
        .status(parsed)
        .attach_time(attach_time())
        .build()
        .map_err(|err| StepError::Assertion(err.to_string()))?;
    attachment_context.state.borrow_mut().attachments.push(attachment);
    Ok(())
}

#[given("an untimed attachment")]
fn untimed_attachment(attachment_context: &AttachmentContext) -> Result<(), StepError> {
    let attachment = Attachment::builder()
        .region(scenario_region())
        .build()
        .map_err(|err| StepError::Assertion(err.to_string()))?;
    attachment_context.state.borrow_mut().attachments.push(attachment);
    Ok(())
}

#[when("I parse the status token \"{token}\"")]
fn parse_status(attachment_context: &AttachmentContext, token: String) {
    attachment_context.state.borrow_mut().parsed = Some(AttachmentStatus::from_token(&token));
}

#[when("I compare the attachments")]
fn compare_attachments(attachment_context: &AttachmentContext) -> Result<(), StepError> {
    let mut state = attachment_context.state.borrow_mut();
    let comparison = match state.attachments.as_slice() {
        [first, second] => first.try_cmp(second),
        other => {
            return Err(StepError::Assertion(format!(
                "expected two attachments, got {}",
                other.len()
            )));
        }
    };
    state.comparison = Some(comparison);
    Ok(())
}

#[then("the attachment status is \"{status}\"")]
fn attachment_status_is(
    attachment_context: &AttachmentContext,
    status: String,
) -> Result<(), StepError> {
    let state = attachment_context.state.borrow();
    let actual = state.attachments.first().and_then(Attachment::status);
    if actual.map(AttachmentStatus::as_token) == Some(status.as_str()) {
        Ok(())
    } else {
        Err(StepError::Assertion(format!(
            "expected status {status}, got {actual:?}"
        )))
    }
}

#[then("the attachment description labels every field")]
fn description_labels_fields(attachment_context: &AttachmentContext) -> Result<(), StepError> {
    let state = attachment_context.state.borrow();
    let rendered = state
        .attachments
        .first()
        .map(ToString::to_string)
        .ok_or_else(|| StepError::Assertion(String::from("missing attachment")))?;
    for label in [
        "region=",
        "volume_id=",
        "instance_id=",
        "device=",
        "status=",
        "attach_time=",
    ] {
        if !rendered.contains(label) {
            return Err(StepError::Assertion(format!(
                "missing {label} in {rendered}"
            )));
        }
    }
    Ok(())
}

#[then("the parsed status is \"{token}\"")]
fn parsed_status_is(attachment_context: &AttachmentContext, token: String) -> Result<(), StepError> {
    match &attachment_context.state.borrow().parsed {
        Some(Ok(status)) if status.as_token() == token => Ok(()),
        other => Err(StepError::Assertion(format!(
            "expected {token}, got {other:?}"
        ))),
    }
}

#[then("status parsing fails with \"{message}\"")]
fn status_parsing_fails(
    attachment_context: &AttachmentContext,
    message: String,
) -> Result<(), StepError> {
    match &attachment_context.state.borrow().parsed {
        Some(Err(err)) if err.to_string() == message => Ok(()),
        other => Err(StepError::Assertion(format!(
            "expected failure '{message}', got {other:?}"
        ))),
    }
}

#[then("the comparison fails with \"{message}\"")]
fn comparison_fails(
    attachment_context: &AttachmentContext,
    message: String,
) -> Result<(), StepError> {
    match &attachment_context.state.borrow().comparison {
        Some(Err(err)) if err.to_string() == message => Ok(()),
        other => Err(StepError::Assertion(format!(
            "expected failure '{message}', got {other:?}"
        ))),
    }
}
