//! Bestpay gateway CLI
//!
//! Sends single requests to the gateway and prints the raw response body.

use anyhow::Context;
use bestpay_client::{BestpayClient, HttpTransport};
use bestpay_core::bank::resolve_bank_account;
use bestpay_core::payload::{PlaceOrderPayload, QueryOrderPayload, RefundPayload, ReversePayload};
use bestpay_shared::{AppConfig, AppError};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bestpay")]
#[command(about = "Bestpay merchant gateway client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe a funding-source code reported by the gateway
    Bank {
        /// bankId code, e.g. EPAYACC or ICBC_B2C
        code: String,
    },

    #[command(flatten)]
    Gateway(GatewayCommand),
}

/// Commands that send a request to the gateway.
#[derive(Subcommand)]
enum GatewayCommand {
    /// Query the status of an order
    Query {
        /// Order number
        order_no: String,
        /// Order request number
        order_req_no: String,
        /// Order time, yyyyMMddHHmmss
        order_date: String,
    },

    /// Charge a payer's barcode
    Pay {
        /// Code scanned from the payer's app
        barcode: String,
        /// Order number
        order_no: String,
        /// Order request number
        order_req_no: String,
        /// Order time, yyyyMMddHHmmss
        order_date: String,
        /// Amount in fen
        amount: i64,
        /// Store number
        #[arg(long)]
        store_id: String,
        /// Goods description
        #[arg(long, default_value = "")]
        goods_name: String,
    },

    /// Refund a settled payment
    Refund {
        /// Original order number
        old_order_no: String,
        /// Original order request number
        old_order_req_no: String,
        /// New refund request number
        refund_req_no: String,
        /// Refund date, yyyyMMdd
        refund_req_date: String,
        /// Amount in fen
        amount: i64,
        /// Merchant transaction password
        #[arg(long, env = "BESTPAY_MERCHANT_PWD")]
        password: String,
    },

    /// Reverse a payment made today
    Reverse {
        /// Original order number
        old_order_no: String,
        /// Original order request number
        old_order_req_no: String,
        /// New reversal request number
        refund_req_no: String,
        /// Reversal date, yyyyMMdd
        refund_req_date: String,
        /// Amount in fen
        amount: i64,
        /// Merchant transaction password
        #[arg(long, env = "BESTPAY_MERCHANT_PWD")]
        password: String,
    },
}

#[tokio::main]
async fn main() {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bestpay=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(Cli::parse()).await {
        let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
        error!(code, "{err:#}");
        std::process::exit(code);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let command = match cli.command {
        Commands::Bank { code } => {
            let descriptor = resolve_bank_account(&code);
            println!(
                "{}\t{}\t{}",
                descriptor.code, descriptor.category, descriptor.description
            );
            return Ok(());
        }
        Commands::Gateway(command) => command,
    };

    // Load configuration
    let config = AppConfig::load().context("failed to load configuration")?;
    let gateway = &config.gateway;
    info!(base_url = %gateway.base_url, mac = %gateway.mac_algorithm, "Gateway configured");

    let client = BestpayClient::from_config(gateway)?;
    let body = send(&client, gateway.merchant_id.clone(), command).await?;

    println!("{body}");
    Ok(())
}

async fn send(
    client: &BestpayClient<HttpTransport>,
    merchant_id: String,
    command: GatewayCommand,
) -> anyhow::Result<String> {
    let body = match command {
        GatewayCommand::Query {
            order_no,
            order_req_no,
            order_date,
        } => {
            client
                .query_order(QueryOrderPayload {
                    merchant_id,
                    order_no,
                    order_req_no,
                    order_date,
                })
                .await
                .map_err(AppError::from)?
        }
        GatewayCommand::Pay {
            barcode,
            order_no,
            order_req_no,
            order_date,
            amount,
            store_id,
            goods_name,
        } => {
            client
                .place_order(PlaceOrderPayload {
                    merchant_id,
                    barcode,
                    order_no,
                    order_req_no,
                    order_date,
                    order_amt: amount,
                    product_amt: amount,
                    store_id,
                    goods_name,
                    ..Default::default()
                })
                .await
                .map_err(AppError::from)?
        }
        GatewayCommand::Refund {
            old_order_no,
            old_order_req_no,
            refund_req_no,
            refund_req_date,
            amount,
            password,
        } => {
            client
                .refund(RefundPayload {
                    merchant_id,
                    merchant_pwd: password,
                    old_order_no,
                    old_order_req_no,
                    refund_req_no,
                    refund_req_date,
                    trans_amt: amount,
                    ..Default::default()
                })
                .await
                .map_err(AppError::from)?
        }
        GatewayCommand::Reverse {
            old_order_no,
            old_order_req_no,
            refund_req_no,
            refund_req_date,
            amount,
            password,
        } => {
            client
                .reverse(ReversePayload {
                    merchant_id,
                    merchant_pwd: password,
                    old_order_no,
                    old_order_req_no,
                    refund_req_no,
                    refund_req_date,
                    trans_amt: amount,
                    ..Default::default()
                })
                .await
                .map_err(AppError::from)?
        }
    };
    Ok(body)
}
