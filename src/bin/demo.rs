use std::{fs::OpenOptions, sync::Arc};

use clap::Parser;
use time::OffsetDateTime;
use tracing_subscriber::{Layer, filter, layer::SubscriberExt, util::SubscriberInitExt};

use carteira::{
    dashboard,
    record::TransactionType,
    register::{RegisterForm, submit},
    resume,
    session::{Session, User},
    store::SqliteStore,
};

/// A terminal shell for the carteira core: prints the dashboard and the
/// current month's category breakdown, optionally registering a record
/// first.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// File path to the application SQLite database.
    #[arg(long, default_value = "carteira.db")]
    db_path: String,

    /// The id of the user whose records to show.
    #[arg(long, default_value = "demo")]
    user_id: String,

    /// The user's display name.
    #[arg(long, default_value = "Demo")]
    user_name: String,

    /// Register a record before showing the screens.
    #[arg(long, num_args = 4, value_names = ["NAME", "AMOUNT", "TYPE", "CATEGORY"])]
    add: Option<Vec<String>>,
}

#[tokio::main]
async fn main() {
    setup_logging();

    let args = Args::parse();

    let store = SqliteStore::open(&args.db_path).expect("Could not open the database.");
    let session = Session::sign_in(User {
        id: args.user_id,
        name: args.user_name,
        email: String::new(),
        photo: None,
    });

    if let Some(add) = &args.add {
        let form = RegisterForm {
            name: add[0].clone(),
            amount: add[1].clone(),
            transaction_type: parse_type(&add[2]),
            category: add[3].clone(),
        };

        match submit(&store, &session, &form).await {
            Ok(record) => println!("Salvo com sucesso! ({})\n", record.id),
            Err(error) => {
                eprintln!("Não foi possível salvar: {error}");
                session.sign_out();
                std::process::exit(1);
            }
        }
    }

    let view = dashboard::load(&store, &session)
        .await
        .expect("Could not load the dashboard.");

    println!("Olá, {}", session.user().name);
    println!();
    println!("Entradas  {:>16}  {}", view.income.amount, view.income.caption);
    println!("Saídas    {:>16}  {}", view.expense.amount, view.expense.caption);
    println!("Total     {:>16}  {}", view.total.amount, view.total.caption);
    println!();
    println!("Listagem");
    for row in &view.rows {
        let sign = match row.transaction_type {
            TransactionType::Income => ' ',
            TransactionType::Expense => '-',
        };
        println!("  {}  {sign}{:>14}  {:<14} {}", row.date, row.amount, row.category, row.name);
    }

    let today = OffsetDateTime::now_utc().date();
    let summary = resume::load(&store, &session, today.month(), today.year())
        .await
        .expect("Could not load the month summary.");

    println!();
    println!("Resumo por categoria ({})", summary.label);
    for entry in &summary.entries {
        println!("  {:<14} {:>14}  {:>3}%", entry.name, entry.total_formatted, entry.percent);
    }

    session.sign_out();
}

fn parse_type(raw: &str) -> Option<TransactionType> {
    match raw {
        "up" | "income" => Some(TransactionType::Income),
        "down" | "expense" => Some(TransactionType::Expense),
        _ => None,
    }
}

fn setup_logging() {
    let stdout_log = tracing_subscriber::fmt::layer().pretty();

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("debug.log")
        .expect("Could not create log file");

    let debug_log = tracing_subscriber::fmt::layer()
        .pretty()
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry()
        .with(
            stdout_log
                .with_filter(filter::LevelFilter::WARN)
                .and_then(debug_log)
                .with_filter(filter::LevelFilter::DEBUG),
        )
        .init();
}
