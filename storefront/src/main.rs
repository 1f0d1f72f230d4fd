//! `storefront` command-line front end.
//!
//! Sign-in and sign-up go through the same form state machines as any other
//! front end, so validation and error mapping are identical.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use shared::{ProductData, ProductPatch};

use storefront::app::{App, FormErrors, FormField, FormPhase};
use storefront::config::ClientConfig;
use storefront::core::error::{AppError, Result};
use storefront::core::service::ApiService;
use storefront::debug::{self, LogConfig};
use storefront::services::api::{ApiClient, ImageUpload};
use storefront::session::Session;

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Storefront account and catalogue client")]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "STOREFRONT_API_URL")]
    api_url: Option<String>,

    /// Session file location
    #[arg(long, env = "STOREFRONT_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Sign in and store the session
    Login {
        #[arg(long)]
        email: Option<String>,
        #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
        password: String,
        /// Remember the email for the next sign-in
        #[arg(long)]
        remember: bool,
    },
    /// Create an account and store the session
    Signup(SignupArgs),
    /// Drop the stored session
    Logout,
    /// Show the user cached in the session
    Whoami,
    /// Fetch the profile from the backend
    Profile,
    /// Exchange the refresh token for a new access token
    Refresh,
    /// Product catalogue
    Products(ProductsCommand),
    /// Upload an image and print its URL
    Upload {
        path: PathBuf,
        /// Send as a base64 data URL instead of a multipart file
        #[arg(long)]
        base64: bool,
    },
}

#[derive(Args, Debug)]
struct SignupArgs {
    #[arg(long)]
    first_name: String,
    #[arg(long)]
    last_name: String,
    #[arg(long)]
    email: String,
    #[arg(long, env = "STOREFRONT_PASSWORD", hide_env_values = true)]
    password: String,
    #[arg(long)]
    confirm_password: String,
    /// Agree to the terms and conditions
    #[arg(long)]
    agree_terms: bool,
}

#[derive(Args, Debug)]
struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Subcommand, Debug)]
enum ProductsSubcommand {
    List,
    Get { id: i64 },
    /// Create from a JSON file
    Create { file: PathBuf },
    /// Update the fields present in a JSON file
    Update { id: i64, file: PathBuf },
    Delete { id: i64 },
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let _log_guard = debug::init(&LogConfig::from_env());

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Command failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<ClientConfig> {
    let mut config = ClientConfig::from_env()?;
    if let Some(api_url) = &cli.api_url {
        config.api_url = api_url.trim_end_matches('/').to_string();
    }
    if let Some(session_file) = &cli.session_file {
        config.session_file = session_file.clone();
    }
    config.validate()?;
    Ok(config)
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let session = Session::from_file(&config.session_file);
    let api = Arc::new(ApiClient::new(&config, session.clone()));

    tracing::debug!(api_url = %config.api_url, "Running command");

    match cli.command {
        Command::Login {
            email,
            password,
            remember,
        } => login(session, api, email, password, remember).await,
        Command::Signup(args) => signup(session, api, args).await,
        Command::Logout => {
            api.logout();
            println!("Signed out");
            Ok(())
        }
        Command::Whoami => {
            match session.user_data() {
                Some(user) => {
                    println!("{} <{}>", user.full_name, user.email);
                    if let Some(joined) = user.joined_at() {
                        println!("Member since {}", joined.format("%Y-%m-%d"));
                    }
                }
                None => println!("Not signed in"),
            }
            Ok(())
        }
        Command::Profile => {
            let user = api.get_user_profile().await?;
            print_json(&user)
        }
        Command::Refresh => {
            api.refresh_access_token().await?;
            println!("Access token refreshed");
            Ok(())
        }
        Command::Products(products) => run_products(api.as_ref(), products.command).await,
        Command::Upload { path, base64 } => {
            let image = ImageUpload::from_path(&path)
                .await
                .map_err(|e| AppError::Validation(format!("Failed to read {}: {}", path.display(), e)))?;
            let image = if base64 { image.into_data_url() } else { image };
            let uploaded = api.upload_image(image).await?;
            println!("{}", uploaded.url);
            Ok(())
        }
    }
}

async fn login(
    session: Session,
    api: Arc<ApiClient>,
    email: Option<String>,
    password: String,
    remember: bool,
) -> Result<()> {
    let mut app = App::new(session, api);
    {
        let mut state = app.state.write();
        if let Some(email) = email {
            state.login.set_email(email);
        }
        state.login.set_password(password);
        let remember = remember || state.login.remember_me;
        state.login.set_remember_me(remember);
    }

    app.handle_login_submit();
    while app.state.read().login.is_submitting() {
        if !app.process_next_event().await {
            break;
        }
    }

    let state = app.state.read();
    report(state.login.phase())?;
    if let Some(user) = &state.current_user {
        println!("Signed in as {} <{}>", user.full_name, user.email);
    }
    Ok(())
}

async fn signup(session: Session, api: Arc<ApiClient>, args: SignupArgs) -> Result<()> {
    let mut app = App::new(session, api);
    app.handle_switch_to_signup();
    {
        let mut state = app.state.write();
        state.signup.set_first_name(args.first_name);
        state.signup.set_last_name(args.last_name);
        state.signup.set_email(args.email);
        state.signup.set_password(args.password);
        state.signup.set_confirm_password(args.confirm_password);
        state.signup.set_agree_terms(args.agree_terms);

        if let Some(strength) = state.signup.strength_label() {
            println!("Password strength: {}", strength);
        }
    }

    app.handle_signup_submit();
    while app.state.read().signup.is_submitting() {
        if !app.process_next_event().await {
            break;
        }
    }

    let state = app.state.read();
    report(state.signup.phase())?;
    if let Some(user) = &state.current_user {
        println!("Account created for {} <{}>", user.full_name, user.email);
    }
    Ok(())
}

/// Print form errors and turn a failed phase into an error.
fn report<F: FormField>(phase: &FormPhase<F>) -> Result<()> {
    match phase {
        FormPhase::Succeeded => Ok(()),
        FormPhase::Failed(errors) | FormPhase::Editing(errors) if !errors.is_empty() => {
            print_form_errors(errors);
            Err(AppError::Validation(
                errors.first_message().unwrap_or_default().to_string(),
            ))
        }
        other => Err(AppError::State(format!("Unexpected form state: {:?}", other))),
    }
}

fn print_form_errors<F: FormField>(errors: &FormErrors<F>) {
    if let Some(general) = errors.general() {
        eprintln!("{}", general);
    }
    for (field, message) in errors.iter() {
        eprintln!("  {}: {}", field.wire_name(), message);
    }
}

async fn run_products(api: &dyn ApiService, command: ProductsSubcommand) -> Result<()> {
    match command {
        ProductsSubcommand::List => {
            let products = api.get_products().await?;
            if products.is_empty() {
                println!("No products");
            }
            for product in products {
                println!(
                    "{:>5}  {:<40}  {:>10.2}  {}",
                    product.id, product.data.name, product.data.price, product.data.category
                );
            }
            Ok(())
        }
        ProductsSubcommand::Get { id } => print_json(&api.get_product_by_id(id).await?),
        ProductsSubcommand::Create { file } => {
            let product: ProductData = read_json(&file)?;
            print_json(&api.create_product(product).await?)
        }
        ProductsSubcommand::Update { id, file } => {
            let patch: ProductPatch = read_json(&file)?;
            if patch.is_empty() {
                return Err(AppError::Validation("Update file sets no fields".to_string()));
            }
            print_json(&api.update_product(id, patch).await?)
        }
        ProductsSubcommand::Delete { id } => {
            api.delete_product(id).await?;
            println!("Deleted product {}", id);
            Ok(())
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &PathBuf) -> Result<T> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| AppError::Validation(format!("Failed to read {}: {}", path.display(), e)))?;
    serde_json::from_str(&contents)
        .map_err(|e| AppError::Validation(format!("Invalid JSON in {}: {}", path.display(), e)))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::State(format!("Failed to render output: {}", e)))?;
    println!("{}", rendered);
    Ok(())
}
