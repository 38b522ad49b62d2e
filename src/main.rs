//! Command-line entry point.
//!
//! The direction of a conversion follows from the input and output formats: a matrix
//! input is tested for being (co)graphic and rendered as a graph, a graph input is
//! converted into its (co)graphic matrix. Format validation happens up front and
//! produces an [`Invocation`] in which only the legal format combinations exist, so
//! the rendering stage never sees an invalid one.

use std::{
    fs::File,
    io::{self, BufRead, BufReader, BufWriter, Write},
    process::ExitCode,
    time::Instant,
};

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use graphmat::{
    convert::{render, GraphToMatrix, MatrixToGraph},
    engine::{Engine, Mode, RecognitionStats},
    error::{GraphmatError, Result},
    io::{
        EdgeListReader, FileFormat, GraphFormat, GraphReader, MatrixFormat, MatrixRead,
        MatrixWrite,
    },
    repr::BinMatrix,
};

#[derive(Debug, Parser)]
#[command(
    name = "graphmat",
    version,
    about = "Converts a graph to a (co)graphic matrix or tests whether a matrix is (co)graphic, depending on the input."
)]
struct Cli {
    /// Input file; `-` reads from standard input
    file: String,

    /// Format of the input file: `dense`, `sparse` (matrix) or `edgelist` (graph)
    #[arg(short = 'i', long = "input-format", value_name = "FORMAT")]
    input_format: Option<String>,

    /// Format of the output: `dense`, `sparse` (matrix) or `edgelist`, `dot` (graph)
    #[arg(short = 'o', long = "output-format", value_name = "FORMAT")]
    output_format: Option<String>,

    /// Test for / convert to the cographic matrix instead of the graphic one
    #[arg(short = 't', long = "cographic")]
    cographic: bool,

    /// Print the elements of a minimal non-(co)graphic submatrix
    #[arg(short = 'n', long = "witness-elements")]
    witness_elements: bool,

    /// Print a minimal non-(co)graphic submatrix
    #[arg(short = 'N', long = "witness-matrix")]
    witness_matrix: bool,

    /// Print statistics about the computation to stderr
    #[arg(short = 's', long = "stats")]
    stats: bool,
}

/// A validated conversion request. The direction and both formats are fixed; only
/// legal combinations are representable.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Invocation {
    /// Matrix input: test for (co)graphicness, output a graph
    MatrixInput {
        input: MatrixFormat,
        output: GraphFormat,
    },
    /// Graph input: compute the (co)graphic matrix
    GraphInput { output: MatrixFormat },
}

fn parse_format(token: &str) -> Result<FileFormat> {
    token
        .parse()
        .map_err(|_| GraphmatError::Usage(format!("unknown file format `{token}`")))
}

/// Applies the defaulting rules and rejects conflicting format categories
fn resolve_invocation(input: Option<&str>, output: Option<&str>) -> Result<Invocation> {
    let input = input.map(parse_format).transpose()?;
    let output = output.map(parse_format).transpose()?;

    if input == Some(FileFormat::Graph(GraphFormat::Dot)) {
        return Err(GraphmatError::Usage(
            "format `dot` is write-only".to_string(),
        ));
    }

    match (input, output) {
        (None, None) => Ok(Invocation::MatrixInput {
            input: MatrixFormat::Dense,
            output: GraphFormat::EdgeList,
        }),
        (None, Some(FileFormat::Matrix(output))) => Ok(Invocation::GraphInput { output }),
        (None, Some(FileFormat::Graph(output))) => Ok(Invocation::MatrixInput {
            input: MatrixFormat::Dense,
            output,
        }),
        (Some(FileFormat::Matrix(input)), None) => Ok(Invocation::MatrixInput {
            input,
            output: GraphFormat::EdgeList,
        }),
        (Some(FileFormat::Matrix(input)), Some(FileFormat::Graph(output))) => {
            Ok(Invocation::MatrixInput { input, output })
        }
        (Some(FileFormat::Matrix(_)), Some(FileFormat::Matrix(_))) => Err(GraphmatError::Usage(
            "either the input or the output must be a graph format".to_string(),
        )),
        (Some(FileFormat::Graph(_)), None) => Ok(Invocation::GraphInput {
            output: MatrixFormat::Dense,
        }),
        (Some(FileFormat::Graph(_)), Some(FileFormat::Matrix(output))) => {
            Ok(Invocation::GraphInput { output })
        }
        (Some(FileFormat::Graph(_)), Some(FileFormat::Graph(_))) => Err(GraphmatError::Usage(
            "either the input or the output must be a matrix format".to_string(),
        )),
    }
}

fn open_input(file: &str) -> Result<Box<dyn BufRead>> {
    if file == "-" {
        Ok(Box::new(BufReader::new(io::stdin())))
    } else {
        let handle = File::open(file)
            .map_err(|e| GraphmatError::Input(format!("cannot open `{file}`: {e}")))?;
        Ok(Box::new(BufReader::new(handle)))
    }
}

fn run(cli: &Cli) -> Result<()> {
    let invocation =
        resolve_invocation(cli.input_format.as_deref(), cli.output_format.as_deref())?;
    let reader = open_input(&cli.file)?;

    let mode = if cli.cographic {
        Mode::Cographic
    } else {
        Mode::Graphic
    };
    let engine = Engine::new();
    let mut stats = RecognitionStats::default();

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match invocation {
        Invocation::MatrixInput { input, output } => {
            let read_start = Instant::now();
            let matrix = BinMatrix::try_from_reader(reader, input)?;
            info!(
                rows = matrix.num_rows(),
                columns = matrix.num_columns(),
                nonzeros = matrix.number_of_nonzeros(),
                elapsed = ?read_start.elapsed(),
                "read matrix"
            );

            let result = MatrixToGraph::new(&engine)
                .mode(mode)
                .witness(cli.witness_elements || cli.witness_matrix)
                .convert(&matrix, &mut stats)?;

            let co = if mode.is_cographic() { "co" } else { "" };
            eprintln!(
                "Matrix {} {co}graphic.",
                if result.matches { "IS" } else { "IS NOT" }
            );

            if let Some(realization) = &result.realization {
                match output {
                    GraphFormat::EdgeList => render::write_edge_list(&mut out, realization, mode)?,
                    GraphFormat::Dot => render::write_dot(&mut out, realization, mode)?,
                }
            }

            if let Some(witness) = &result.witness {
                if cli.witness_elements {
                    eprintln!(
                        "\nMinimal non-{co}graphic submatrix consists of these elements of the input matrix:"
                    );
                    render::write_witness_elements(&mut out, witness)?;
                }
                if cli.witness_matrix {
                    let violator = matrix.zoom(witness);
                    eprintln!(
                        "\nMinimal {}x{} non-{co}graphic matrix with {} nonzeros.",
                        violator.num_rows(),
                        violator.num_columns(),
                        violator.number_of_nonzeros()
                    );
                    violator.try_write_to_writer(&mut out, input)?;
                }
            }
        }
        Invocation::GraphInput { output } => {
            let graph = EdgeListReader::new().try_read_graph(reader)?;
            info!(
                nodes = graph.number_of_nodes(),
                edges = graph.number_of_edges(),
                "read graph"
            );

            let compute_start = Instant::now();
            let matrix = GraphToMatrix::new(&engine).mode(mode).convert(&graph)?;
            info!(elapsed = ?compute_start.elapsed(), "computed matrix");

            matrix.try_write_to_writer(&mut out, output)?;
        }
    }

    if cli.stats {
        eprint!("{stats}");
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::FAILURE
        }
    }
}
