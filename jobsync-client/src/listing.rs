//! Parsing `api/xml?tree=jobs[name]` replies.
//!
//! ```xml
//! <hudson _class="hudson.model.Hudson">
//!   <job _class="...WorkflowMultiBranchProject"><name>lib-a</name></job>
//!   <job _class="...WorkflowMultiBranchProject"><name>lib-b</name></job>
//! </hudson>
//! ```
//!
//! The root element differs between the top-level listing and a multibranch
//! job's branch listing; only `<root>/job/name` is read.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::ClientError;

/// Job names in the order the orchestrator listed them. Blank names are skipped.
pub fn parse_job_names(xml: &str) -> Result<Vec<String>, ClientError> {
    let mut reader = Reader::from_str(xml);
    let mut stack: Vec<Vec<u8>> = Vec::new();
    let mut names = Vec::new();
    let mut current: Option<String> = None;

    loop {
        let position = reader.buffer_position();
        let event = reader
            .read_event()
            .map_err(|source| ClientError::Listing { position, source })?;
        match event {
            Event::Start(e) => {
                stack.push(e.name().as_ref().to_vec());
                if is_job_name(&stack) {
                    current = Some(String::new());
                }
            }
            Event::Empty(_) => {}
            Event::Text(e) => {
                if let Some(name) = current.as_mut() {
                    let text = e
                        .unescape()
                        .map_err(|source| ClientError::Listing { position, source })?;
                    name.push_str(&text);
                }
            }
            Event::End(_) => {
                if is_job_name(&stack) {
                    if let Some(name) = current.take() {
                        let name = name.trim();
                        if !name.is_empty() {
                            names.push(name.to_string());
                        }
                    }
                }
                stack.pop();
            }
            Event::Eof => break,
            _ => {}
        }
    }

    Ok(names)
}

fn is_job_name(stack: &[Vec<u8>]) -> bool {
    stack.len() == 3 && stack[1] == b"job" && stack[2] == b"name"
}
