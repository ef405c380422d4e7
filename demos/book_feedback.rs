use std::sync::Arc;

use booknet::api::feedback::{
    find_all_feedbacks_by_book::FindAllFeedbacksByBookParams, savefeedback::SavefeedbackParams,
};
use booknet::api::models::FeedbackRequest;
use booknet::auth::{AuthError, Jwt, TokenAuth};
use booknet::client::{ApiConfiguration, AuthenticatedClient, DEFAULT_ROOT_URL};
use booknet::guard::{AuthGuard, Router};
use booknet::login::LoginFlow;
use booknet::services::FeedbackService;
use booknet::session::FileSessionStore;
use clap::Parser;
use miette::IntoDiagnostic;

#[derive(Parser, Debug)]
#[command(author, version, about = "Rate a book and list its feedback")]
struct Args {
    /// Book to rate
    book_id: i64,

    /// Access token issued by the identity provider; reuses the stored one when omitted
    #[arg(long)]
    token: Option<String>,

    /// Rating from 0 to 5
    #[arg(short, long)]
    note: Option<f64>,

    /// Review text, sent together with the rating
    #[arg(short, long, default_value = "")]
    review: String,

    /// API root
    #[arg(long, default_value = DEFAULT_ROOT_URL)]
    root: String,

    /// Where the session token is kept between runs
    #[arg(long, default_value = "booknet-session.json")]
    session_file: String,
}

struct Console;

impl Router for Console {
    fn navigate(&self, path: &str) {
        println!("→ redirected to {path}");
    }
}

#[tokio::main]
async fn main() -> miette::Result<()> {
    let args = Args::parse();

    let auth = Arc::new(TokenAuth::new(Arc::new(FileSessionStore::new(
        &args.session_file,
    ))));
    if let Some(token) = args.token {
        auth.set_token(Jwt::new(token)).await?;
    }

    match LoginFlow::run(&auth).await {
        Ok(()) | Err(AuthError::NotAuthenticated) => {}
        Err(e) => return Err(e.into()),
    }
    if !AuthGuard::new(auth.clone(), Console).can_activate("/books") {
        println!("Session missing or expired, pass a fresh --token");
        return Ok(());
    }

    let config = ApiConfiguration::parse(&args.root).into_diagnostic()?;
    let feedback = FeedbackService::new(
        config,
        AuthenticatedClient::new(reqwest::Client::new(), auth),
    );

    if let Some(note) = args.note {
        let request = FeedbackRequest::new()
            .book_id(args.book_id)
            .note(note)
            .review(args.review)
            .build();
        let id = feedback
            .savefeedback(&SavefeedbackParams::new().body(request).build(), None)
            .await?;
        println!("✓ Saved feedback {id}");
    }

    let page = feedback
        .find_all_feedbacks_by_book(
            &FindAllFeedbacksByBookParams::new()
                .book_id(args.book_id)
                .page(0)
                .size(10)
                .build(),
            None,
        )
        .await?;
    println!(
        "{} feedback entries",
        page.total_elements.unwrap_or(page.content.len() as i64)
    );
    for entry in page.content {
        let mine = if entry.own_feedback == Some(true) { " (yours)" } else { "" };
        println!(
            "  {:.1}★ {}{mine}",
            entry.note.unwrap_or_default(),
            entry.review.unwrap_or_default()
        );
    }

    Ok(())
}
