use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use color_eyre::eyre::{Result, WrapErr, eyre};
use dotenv::dotenv;
use slotbook_client::{
    admin::AdminReview,
    booking::{BookingFlow, MyBookings},
    config::ClientConfig,
    router::{Route, authorize},
    session::{Session, SessionProvider},
    source::BookingSource,
};
use slotbook_core::{
    SelectOutcome, Slot,
    models::{business::Business, category::Category},
};
use tracing::info;
use tracing_subscriber::FmtSubscriber;
use uuid::Uuid;

/// Browse businesses and book appointment slots from the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List service categories
    Categories,

    /// List approved businesses
    Businesses {
        /// Only show businesses in this category
        #[arg(short, long)]
        category: Option<Category>,
    },

    /// Show the slot grid of a business for a day
    Slots {
        business_id: Uuid,

        /// Day to show (defaults to today)
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Mark this HH:MM slot as selected
        #[arg(short, long)]
        select: Option<String>,
    },

    /// Book a slot for the signed-in user
    Book {
        business_id: Uuid,

        #[arg(short, long)]
        date: NaiveDate,

        /// Start time as HH:MM
        #[arg(short, long)]
        time: String,

        #[arg(short, long)]
        note: Option<String>,
    },

    /// Show the signed-in user's bookings
    Bookings,

    /// Review businesses awaiting approval (administrators only)
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand, Debug)]
enum AdminAction {
    /// List businesses awaiting review
    Pending,

    /// Approve a business so it shows up in listings
    Approve { business_id: Uuid },

    /// Reject a business
    Reject { business_id: Uuid },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    let args = Args::parse();
    let config = ClientConfig::from_env()?;

    let subscriber = FmtSubscriber::builder()
        .with_max_level(config.log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let source = slotbook_client::connect(&config)?;
    let session = SessionProvider::new(&source)
        .resolve(config.api_token.as_deref())
        .await?;
    let today = Local::now().date_naive();
    info!(signed_in = session.is_authenticated(), "client ready");

    match args.command {
        Command::Categories => {
            for category in source.categories().await? {
                println!("{:<10} {}", category.slug(), category.icon().path);
            }
        }
        Command::Businesses { category } => {
            for business in source.businesses(category).await? {
                print_business(&business);
            }
        }
        Command::Slots {
            business_id,
            date,
            select,
        } => {
            gate(&Route::BusinessDetails { id: business_id }, &session)?;
            let date = date.unwrap_or(today);
            let mut flow = BookingFlow::load(&source, business_id, date, today).await?;
            if let Some(label) = select {
                if !matches!(flow.on_select(&label), SelectOutcome::Selected(_)) {
                    println!("{} cannot be selected", label);
                }
            }
            println!("{} on {}", flow.business().name, flow.date());
            print_grid(&flow.slots());
        }
        Command::Book {
            business_id,
            date,
            time,
            note,
        } => {
            gate(&Route::BusinessDetails { id: business_id }, &session)?;
            let mut flow = BookingFlow::load(&source, business_id, date, today).await?;
            match flow.on_select(&time) {
                SelectOutcome::Selected(_) => {}
                SelectOutcome::RejectedBooked => {
                    return Err(eyre!("{} is already booked", time));
                }
                SelectOutcome::Unknown => {
                    return Err(eyre!("{} is not a slot of this business", time));
                }
            }
            let booking = flow.confirm(&session, note).await?;
            println!(
                "Booked {} at {} on {} ({})",
                flow.business().name,
                booking.time,
                booking.date,
                booking.id
            );
        }
        Command::Bookings => {
            gate(&Route::MyBookings, &session)?;
            let bookings = MyBookings::load(&source, &session, today).await?;
            println!("Upcoming");
            for booking in &bookings.upcoming {
                println!("  {} {}  {}", booking.date, booking.time, booking.business_id);
            }
            println!("History");
            for booking in &bookings.history {
                println!(
                    "  {} {}  {} ({:?})",
                    booking.date, booking.time, booking.business_id, booking.status
                );
            }
        }
        Command::Admin { action } => {
            let review =
                AdminReview::open(&source, &session).wrap_err_with(|| access_hint(&session))?;
            match action {
                AdminAction::Pending => {
                    for business in review.pending().await? {
                        print_business(&business);
                    }
                }
                AdminAction::Approve { business_id } => {
                    let business = review.approve(business_id).await?;
                    println!("Approved {}", business.name);
                }
                AdminAction::Reject { business_id } => {
                    let business = review.reject(business_id).await?;
                    println!("Rejected {}", business.name);
                }
            }
        }
    }

    Ok(())
}

/// Applies the page access rules to the command opening `route`.
fn gate(route: &Route, session: &Session) -> Result<()> {
    authorize(route, session).wrap_err_with(|| access_hint(session))
}

fn access_hint(session: &Session) -> &'static str {
    if session.is_authenticated() {
        "this command needs an administrator token in API_TOKEN"
    } else {
        "set API_TOKEN to a valid token to use this command"
    }
}

fn print_business(business: &Business) {
    println!(
        "{}  {:<24} {:<10} {}",
        business.id, business.name, business.category, business.address
    );
}

fn print_grid(slots: &[Slot]) {
    if slots.is_empty() {
        println!("No working hours configured for this day");
        return;
    }
    for row in slots.chunks(4) {
        let cells: Vec<String> = row
            .iter()
            .map(|slot| {
                let mark = if slot.is_selected {
                    '*'
                } else if slot.is_booked {
                    'x'
                } else {
                    ' '
                };
                format!("[{}{}]", slot.label, mark)
            })
            .collect();
        println!("{}", cells.join(" "));
    }
}
