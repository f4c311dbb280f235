//! The recommendation request controller.
//!
//! Wires a line of user input to one outbound request and renders the
//! response or error into the output sink. Constructed once at startup;
//! there is no module-level mutable state.

use crate::render;

use client_core::RecommendClient;

use models::{ModelError, RecommendRequest};

use std::io::Write;

use log::{info, warn};

pub struct RecommendController<W: Write> {
    client: RecommendClient,
    output: W,
    top_k: u32,
}

impl<W: Write> RecommendController<W> {
    pub fn new(client: RecommendClient, output: W, top_k: u32) -> Self {
        Self {
            client,
            output,
            top_k,
        }
    }

    /// Run one request/render cycle for a line of user input.
    ///
    /// The prompt loop awaits this method, so a second trigger cannot fire
    /// while a request is outstanding. Every path returns control to the
    /// prompt: validation failures and request failures are rendered
    /// inline, never propagated.
    ///
    /// # Errors
    ///
    /// Returns an error only when writing to the output sink itself fails.
    pub async fn handle_query(&mut self, raw: &str) -> std::io::Result<()> {
        let query = raw.trim();
        if query.is_empty() {
            // No network call, no state reset.
            writeln!(self.output, "{}", render::EMPTY_QUERY_MESSAGE)?;
            return Ok(());
        }

        writeln!(self.output, "{}", render::searching_message(query))?;

        let request = match RecommendRequest::builder()
            .with_query(query)
            .with_top_k(self.top_k)
            .build()
        {
            Ok(request) => request,
            Err(ModelError::Validation { message, .. }) => {
                // Unreachable for non-empty input, but the builder owns the
                // rules; render whatever it rejects.
                warn!("Rejected query: {message}");
                writeln!(self.output, "{}", render::error_message(&message))?;
                return Ok(());
            }
        };

        match self.client.recommend(&request).await {
            Ok(assessments) if assessments.is_empty() => {
                info!("No recommendations for {query:?}");
                writeln!(self.output, "{}", render::NO_RESULTS_MESSAGE)?;
            }
            Ok(assessments) => {
                writeln!(
                    self.output,
                    "{}",
                    render::result_count_message(assessments.len())
                )?;
                write!(self.output, "{}", render::render_cards(&assessments))?;
            }
            Err(error) => {
                warn!("Request cycle failed: {error}");
                writeln!(
                    self.output,
                    "{}",
                    render::error_message(error.user_message())
                )?;
            }
        }

        Ok(())
    }
}
