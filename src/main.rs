use csv::{ReaderBuilder, Trim};
use tokio::sync::mpsc;

use crate::bank::Account;

mod bank;

/// The size of the channel for streaming operations to the branch.
const CHANNEL_SIZE: usize = 100;

#[tokio::main]
async fn main() {
    let args = std::env::args().collect::<Vec<_>>();
    if args.len() != 2 {
        eprintln!("Usage: {} <operations_csv_file>", args[0]);
        std::process::exit(1);
    }
    let input_file = &args[1];

    let (sender, receiver) = mpsc::channel(CHANNEL_SIZE);
    let mut branch = bank::Branch::new(receiver);

    let handle = tokio::spawn(async move {
        branch.run().await;
        branch
    });

    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(input_file)
        .expect("Failed to read CSV file");

    for operation in reader.deserialize().flatten() {
        if let Err(err) = sender.send(operation).await {
            eprintln!("Error sending operation: {err}");
        }
    }

    drop(sender); // Close the sender to signal no more operations will be sent
    let branch = handle
        .await
        .expect("Failed to join the branch handling task");

    let mut writer = csv::Writer::from_writer(std::io::stdout());
    for account in branch.get_all_accounts().values() {
        if let Err(err) = writer.serialize(account.base()) {
            eprintln!("Error writing account summary: {err}");
        }
    }
}
