//! Walk the onboarding wizard end to end against the in-memory identity
//! provider, printing the route-gate decisions and the request body that
//! would be sent. Set `INKARYA_API_BASE` to actually submit.

use anyhow::{Context, Result};
use chrono::NaiveDate;

use inkarya_onboarding::gate;
use inkarya_onboarding::identity::{InMemoryIdentity, IdentityProvider};
use inkarya_onboarding::{
    ClientConfig, Credentials, OnboardingWizard, ProfileClient, SelectionKind,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let identity = InMemoryIdentity::new();
    let creds = Credentials::new("andi@example.com", "rahasia");
    let user = identity
        .sign_up_with_credential(&creds, "Andi Pratama")
        .await
        .context("sign up")?;
    println!("signed up: {} (onboarded: {})", user.email, user.onboarded);
    println!(
        "gate(/lowongan) before onboarding: {:?}",
        gate::decide(Some(&user), "/lowongan")
    );

    let mut wizard = OnboardingWizard::for_user(user.display_name.as_deref());
    wizard.advance();

    wizard.set_field_value("interest", "Web development");
    wizard.set_field_value("location", "Jakarta, DKI Jakarta");
    wizard.set_date(NaiveDate::from_ymd_opt(1995, 8, 17).context("valid date")?);
    wizard.toggle_selection(SelectionKind::Skills, 1);
    wizard.toggle_selection(SelectionKind::Skills, 6);
    wizard.toggle_selection(SelectionKind::Disabilities, 2);
    wizard.advance();

    wizard.set_field_value("status", "Pekerja");
    wizard.set_field_value("availability", "Full-time");

    let payload = wizard.payload().context("payload ready at final step")?;
    println!("request body:\n{}", serde_json::to_string_pretty(&payload)?);

    if std::env::var("INKARYA_API_BASE").is_ok() {
        let client = ProfileClient::new(ClientConfig::from_env())?;
        wizard.submit(&client, &identity).await?;
        let user = identity
            .current_user()
            .await?
            .context("session still active")?;
        println!(
            "submitted; gate(/lowongan) after onboarding: {:?}",
            gate::decide(Some(&user), "/lowongan")
        );
    } else {
        println!("INKARYA_API_BASE not set; skipping the network submit");
    }

    Ok(())
}
