//! Registration form demo.
//!
//! Drives a registration schema the way a rendering layer would: change and
//! blur events, a failed submit with every error surfaced, then a corrected
//! run with an async submit handler.
//!
//! Run with `cargo run --example registration`; engine activity is logged
//! to `registration.log`.

use std::fs::File;
use std::time::Duration;

use formwork::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

fn registration_schema() -> Schema {
    Schema::builder()
        .field("name", [required(), min_length(3)])
        .field("email", [required().with_message("Email is required"), email()])
        .field("password", [required(), strength(StrengthConfig::default())])
        .field(
            "confirm_password",
            [
                required().with_message("Confirm your password"),
                equals_field("password").with_message("Passwords must match"),
            ],
        )
        .field("country", [required().with_message("Select a country")])
        .field(
            "phone",
            [when_field_is(
                "country",
                "Mexico",
                pattern(r"^(\+52\s?)?[0-9]{10}$", "Invalid Mexican phone number"),
            )],
        )
        .field("website", [url().with_message("Enter a valid URL")])
        .checkbox("terms", [required().with_message("You must accept the terms")])
        .build()
}

fn blank_values() -> FormValues {
    [
        ("name", Value::from("")),
        ("email", Value::from("")),
        ("password", Value::from("")),
        ("confirm_password", Value::from("")),
        ("country", Value::from("")),
        ("phone", Value::from("")),
        ("website", Value::from("")),
        ("terms", Value::from(false)),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

#[tokio::main]
async fn main() {
    if let Ok(log_file) = File::create("registration.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let form = Form::new(registration_schema(), blank_values());

    // Untouched fields stay quiet while the user types.
    form.change("name", "no");
    println!("name error before blur: {:?}", form.error("name"));

    // Blur surfaces the failure.
    form.blur("name");
    println!("name error after blur:  {:?}", form.error("name"));

    // Submitting a half-filled form touches everything and rejects.
    let outcome = form
        .submit(|_values| async move { Ok::<(), std::io::Error>(()) })
        .await;
    if let Some(report) = outcome.report() {
        println!("\nsubmit rejected with {} error(s):", report.errors().len());
        for error in report.field_errors() {
            println!("  {error}");
        }
    }

    // Fill the form in properly.
    form.change("name", "Ada Lovelace");
    form.change("email", "ada@example.com");
    form.change("password", "Abcdefg1!");
    form.change("confirm_password", "Abcdefg1!");
    form.change("country", "Mexico");
    form.change("phone", "+52 5512345678");
    form.change("website", "https://example.com");
    form.change("terms", true);

    let outcome = form
        .submit(|values| async move {
            println!("\nsubmitting {} field(s)...", values.len());
            tokio::time::sleep(Duration::from_millis(200)).await;
            Ok::<(), std::io::Error>(())
        })
        .await;

    match outcome {
        SubmitOutcome::Completed => println!("registration complete"),
        SubmitOutcome::Rejected(report) => println!("still invalid: {:?}", report.errors()),
        SubmitOutcome::AlreadyInFlight => println!("a submit was already running"),
        SubmitOutcome::Failed(error) => println!("submission failed: {error}"),
    }
}
