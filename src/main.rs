mod columns;
mod csv_table;
mod describe;
mod input;
mod plot;

use bpaf::Bpaf;

#[derive(Bpaf)]
#[bpaf(options)]
/// Descriptive statistics for a column of numbers
enum Subcommand {
    #[bpaf(command)]
    /// Print the mean, median, mode, variance and standard deviation
    Describe(#[bpaf(external(describe::options))] describe::Options),
    #[bpaf(command)]
    /// Produce a box plot or histogram as a vega-lite spec
    Plot(#[bpaf(external(plot::options))] plot::Options),
    #[bpaf(command)]
    /// List the numeric columns of a CSV file
    Columns(#[bpaf(external(columns::options))] columns::Options),
}

fn main() {
    env_logger::init();
    let result = match subcommand().run() {
        Subcommand::Describe(opts) => describe::describe(opts),
        Subcommand::Plot(opts) => plot::plot(opts),
        Subcommand::Columns(opts) => columns::columns(opts),
    };
    match result {
        Ok(()) => (),
        Err(e) => {
            // Ignore EPIPE
            if let Some(e) = e.downcast_ref::<std::io::Error>() {
                if e.kind() == std::io::ErrorKind::BrokenPipe {
                    return;
                }
            }
            eprintln!("Error: {:#}", e);
            std::process::exit(1)
        }
    }
}
