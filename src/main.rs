//! Loan amortization CLI
//!
//! Command-line front end for the amortization engine

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use loan_amortization::export::write_csv;
use loan_amortization::{
    summarize, CalculatorConfig, LoanCalculator, LoanParameters, LoanResult, RepaymentPolicy, Schedule,
};

#[derive(Debug, Parser)]
#[command(name = "amortize", version, about = "Loan amortization schedules and summaries")]
struct Cli {
    /// JSON config file (tolerances, schedule retention)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Summary figures and validation outcome for one policy
    Summary {
        #[command(flatten)]
        loan: LoanArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Per-period schedule table, or CSV export
    Schedule {
        #[command(flatten)]
        loan: LoanArgs,

        /// Write the schedule with a totals row to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Rows to print when not exporting (0 = all)
        #[arg(long, default_value_t = 0)]
        limit: usize,
    },
    /// The same loan under every repayment policy
    Compare {
        #[command(flatten)]
        loan: LoanArgs,
    },
}

#[derive(Debug, Args)]
struct LoanArgs {
    /// Repayment policy tag (equal_payment, equal_principal, bullet,
    /// grace_equal_payment, grace_equal_principal)
    #[arg(long, default_value = "equal_payment")]
    policy: String,

    /// Loan amount
    #[arg(long)]
    principal: f64,

    /// Annual rate in percent
    #[arg(long)]
    rate: f64,

    /// Term in months
    #[arg(long)]
    term: u32,

    /// Grace period in months
    #[arg(long, default_value_t = 0)]
    grace: u32,
}

impl LoanArgs {
    /// Range-check the inputs and build the parameters
    fn to_params(&self) -> Result<LoanParameters> {
        let params = LoanParameters::new(
            RepaymentPolicy::from_tag(&self.policy),
            self.principal,
            self.rate,
            self.term,
            self.grace,
        );

        let check = params.validate();
        if !check.valid {
            for error in &check.errors {
                eprintln!("  {}: {}", error.field(), error);
            }
            bail!("invalid loan inputs ({} error(s))", check.errors.len());
        }
        Ok(params)
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => CalculatorConfig::from_json_path(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => CalculatorConfig::default(),
    }
    .with_env_overrides();
    let calculator = LoanCalculator::new(config);

    match cli.command {
        Command::Summary { loan, json } => {
            let result = calculator.calculate(&loan.to_params()?);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_summary(&result);
            }
        }
        Command::Schedule { loan, csv, limit } => {
            let params = loan.to_params()?;
            let schedule = calculator.generate_schedule(&params);
            match csv {
                Some(path) => {
                    let file = File::create(&path)
                        .with_context(|| format!("creating {}", path.display()))?;
                    let summary = summarize(&schedule, params.principal);
                    write_csv(BufWriter::new(file), &schedule, &summary)?;
                    println!("Schedule written to: {}", path.display());
                }
                None => print_schedule(&schedule, params.principal, limit),
            }
        }
        Command::Compare { loan } => {
            let results = calculator.calculate_all(&loan.to_params()?);
            print_comparison(&results);
        }
    }

    Ok(())
}

fn print_summary(result: &LoanResult) {
    let params = &result.params;
    let summary = &result.summary;

    println!("{} ({})", result.policy.label, result.policy.localized_label);
    println!("  Principal: {:.0}", params.principal);
    println!("  Annual rate: {}%", params.annual_rate_percent);
    println!("  Term: {} months", params.term_months);
    if let (Some(grace_payment), Some(repayment_months)) =
        (result.policy.grace_payment, result.policy.repayment_months)
    {
        println!("  Grace: {} months at {:.0}", params.term_months - repayment_months, grace_payment);
        println!("  Repayment: {} months", repayment_months);
    }
    println!();
    println!("  First payment: {:.0}", summary.first_payment);
    println!("  Last payment: {:.0}", summary.last_payment);
    println!("  Max payment: {:.0}", summary.max_payment);
    println!("  Avg payment: {:.0}", summary.avg_payment);
    println!("  Total interest: {:.0}", summary.total_interest);
    println!("  Total payment: {:.0}", summary.total_payment);

    if result.validation.is_valid {
        println!("\nValidation: OK");
    } else {
        println!("\nValidation: {} issue(s)", result.validation.discrepancies.len());
        for message in result.validation.messages() {
            println!("  - {}", message);
        }
    }
}

fn print_schedule(schedule: &Schedule, principal: f64, limit: usize) {
    println!("{:>6} {:>16} {:>16} {:>14} {:>16}  {}",
        "Period", "Payment", "Principal", "Interest", "Balance", "Note");
    println!("{}", "-".repeat(90));

    let shown = if limit == 0 { schedule.len() } else { limit.min(schedule.len()) };
    for row in schedule.iter().take(shown) {
        println!("{:>6} {:>16.0} {:>16.0} {:>14.0} {:>16.0}  {}",
            row.period_index,
            row.payment_amount,
            row.principal_component,
            row.interest_component,
            row.balance_after,
            row.kind.note(),
        );
    }
    if shown < schedule.len() {
        println!("... ({} more periods)", schedule.len() - shown);
    }

    let summary = summarize(schedule, principal);
    println!("{}", "-".repeat(90));
    println!("{:>6} {:>16.0} {:>16.0} {:>14.0} {:>16.0}",
        "Total",
        summary.total_payment,
        summary.total_principal_paid,
        summary.total_interest,
        summary.final_balance,
    );
}

fn print_comparison(results: &[LoanResult]) {
    println!("{:<34} {:>14} {:>14} {:>16} {:>16}  {}",
        "Policy", "First", "Max", "Total interest", "Total payment", "Valid");
    println!("{}", "-".repeat(105));
    for result in results {
        println!("{:<34} {:>14.0} {:>14.0} {:>16.0} {:>16.0}  {}",
            result.policy.label,
            result.summary.first_payment,
            result.summary.max_payment,
            result.summary.total_interest,
            result.summary.total_payment,
            if result.is_valid() { "yes" } else { "no" },
        );
    }
}
