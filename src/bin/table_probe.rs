use std::env;
use std::time::Instant;

use dense_dp::{pairwise_alignment_score, triple_lcs_length};
use sysinfo::{get_current_pid, ProcessRefreshKind, System};

fn main() {
    let options = match Options::parse(env::args().skip(1)) {
        Ok(opts) => opts,
        Err(err) => {
            eprintln!("table_probe: {err}");
            Options::print_help();
            std::process::exit(2);
        }
    };

    let mut sys = System::new();
    let mut measurements = Vec::new();

    eprintln!("[1/2] Pairwise global alignment, dense table...");
    measurements.extend(run_pairwise(&options, &mut sys));
    eprintln!("[2/2] Triple LCS, dense 3-D table...");
    measurements.extend(run_triple(&options, &mut sys));

    let failed = measurements
        .iter()
        .filter(|m| matches!(m.verification, Verification::Failed))
        .count();
    eprintln!(
        "probe finished: {} runs, {} verification failure(s)",
        measurements.len(),
        failed
    );

    options.format.write(&measurements);
    if failed > 0 {
        std::process::exit(1);
    }
}

struct Options {
    format: OutputFormat,
    verify_limit: usize,
}

impl Options {
    fn parse<I, T>(mut args: I) -> Result<Self, String>
    where
        I: Iterator<Item = T>,
        T: Into<String>,
    {
        let mut format = OutputFormat::Csv;
        let mut verify_limit = 512usize;

        while let Some(arg) = args.next() {
            let arg = arg.into();
            if arg == "--help" || arg == "-h" {
                Options::print_help();
                std::process::exit(0);
            } else if let Some(value) = arg.strip_prefix("--format=") {
                format = OutputFormat::from_str(value)?;
            } else if arg == "--format" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --format".to_string())?
                    .into();
                format = OutputFormat::from_str(&value)?;
            } else if let Some(value) = arg.strip_prefix("--verify-limit=") {
                verify_limit = parse_limit(value)?;
            } else if arg == "--verify-limit" {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value after --verify-limit".to_string())?
                    .into();
                verify_limit = parse_limit(&value)?;
            } else {
                return Err(format!("unrecognized argument '{arg}'"));
            }
        }

        Ok(Self {
            format,
            verify_limit,
        })
    }

    fn print_help() {
        println!(
            "\
Usage: cargo run --bin table_probe [-- <options>]

Options:
  --format <csv|table|json>     Output format (default: csv)
  --verify-limit <N>            Maximum sequence length to verify against an
                                independent full-table baseline (default: 512)
  -h, --help                    Print this help message
"
        );
    }
}

fn parse_limit(value: &str) -> Result<usize, String> {
    value
        .parse::<usize>()
        .map_err(|_| "verify limit must be a non-negative integer".to_string())
}

#[derive(Copy, Clone)]
enum OutputFormat {
    Csv,
    Table,
    Json,
}

impl OutputFormat {
    fn from_str(value: &str) -> Result<Self, String> {
        match value {
            "csv" => Ok(Self::Csv),
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}'")),
        }
    }

    fn write(self, measurements: &[Measurement]) {
        match self {
            OutputFormat::Csv => write_csv(measurements),
            OutputFormat::Table => write_table(measurements),
            OutputFormat::Json => write_json(measurements),
        }
    }
}

struct Measurement {
    scenario: &'static str,
    size_desc: String,
    result: i64,
    wall_s: f64,
    rss_delta_kib: u64,
    verification: Verification,
}

#[derive(Clone, Copy)]
enum Verification {
    NotChecked,
    Passed,
    Failed,
}

impl Verification {
    fn label(&self) -> &'static str {
        match self {
            Verification::NotChecked => "not_checked",
            Verification::Passed => "passed",
            Verification::Failed => "failed",
        }
    }
}

fn run_pairwise(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[256, 512, 1024, 2048, 4096, 8192];
    const MISMATCH: i32 = -1;
    const GAP: i32 = -2;

    SIZES
        .iter()
        .map(|&len| {
            let s = deterministic_dna(len, 0);
            let t = deterministic_dna(len, 2);
            measure("pairwise_alignment", format!("len={len}"), sys, || {
                let score = pairwise_alignment_score(&s, &t, MISMATCH, GAP);
                let verification = if len <= options.verify_limit {
                    if score == baseline_pairwise(&s, &t, MISMATCH, GAP) {
                        Verification::Passed
                    } else {
                        Verification::Failed
                    }
                } else {
                    Verification::NotChecked
                };
                (i64::from(score), verification)
            })
        })
        .collect()
}

fn run_triple(options: &Options, sys: &mut System) -> Vec<Measurement> {
    const SIZES: &[usize] = &[16, 32, 64, 128, 192, 256];

    SIZES
        .iter()
        .map(|&len| {
            let s = deterministic_dna(len, 0);
            let t = deterministic_dna(len, 1);
            let u = deterministic_dna(len, 3);
            measure("triple_lcs", format!("len={len}"), sys, || {
                let length = triple_lcs_length(&s, &t, &u);
                let verification = if len <= options.verify_limit {
                    if length == baseline_triple(&s, &t, &u) {
                        Verification::Passed
                    } else {
                        Verification::Failed
                    }
                } else {
                    Verification::NotChecked
                };
                (i64::from(length), verification)
            })
        })
        .collect()
}

fn measure<F>(
    scenario: &'static str,
    size_desc: String,
    sys: &mut System,
    compute: F,
) -> Measurement
where
    F: FnOnce() -> (i64, Verification),
{
    let before = rss_kib(sys);
    let start = Instant::now();
    let (result, verification) = compute();
    let wall_s = start.elapsed().as_secs_f64();
    let after = rss_kib(sys);

    eprintln!(
        "      {scenario} {size_desc}: result={result}, time={wall_s:.3}s, status={}",
        verification.label()
    );

    Measurement {
        scenario,
        size_desc,
        result,
        wall_s,
        rss_delta_kib: after.saturating_sub(before),
        verification,
    }
}

fn rss_kib(sys: &mut System) -> u64 {
    sys.refresh_processes_specifics(ProcessRefreshKind::new());
    if let Some(process) = get_current_pid().ok().and_then(|pid| sys.process(pid)) {
        process.memory() / 1024
    } else {
        0
    }
}

fn deterministic_dna(len: usize, offset: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|i| ALPHABET[(i + offset) % ALPHABET.len()])
        .collect()
}

/// Independent full-table baseline for the pairwise score.
fn baseline_pairwise(s: &[u8], t: &[u8], mismatch: i32, gap: i32) -> i32 {
    let n = s.len();
    let m = t.len();
    let mut dp = vec![vec![0i32; m + 1]; n + 1];
    for i in 1..=n {
        dp[i][0] = dp[i - 1][0] + gap;
    }
    for j in 1..=m {
        dp[0][j] = dp[0][j - 1] + gap;
    }
    for i in 1..=n {
        for j in 1..=m {
            let pair = if s[i - 1] == t[j - 1] { 1 } else { mismatch };
            let diag = dp[i - 1][j - 1] + pair;
            let up = dp[i - 1][j] + gap;
            let left = dp[i][j - 1] + gap;
            dp[i][j] = diag.max(up).max(left);
        }
    }
    dp[n][m]
}

/// Independent full-table baseline for the triple LCS length.
fn baseline_triple(s: &[u8], t: &[u8], u: &[u8]) -> u32 {
    let n = s.len();
    let m = t.len();
    let p = u.len();
    let mut dp = vec![vec![vec![0u32; p + 1]; m + 1]; n + 1];
    for i in 1..=n {
        for j in 1..=m {
            for k in 1..=p {
                dp[i][j][k] = if s[i - 1] == t[j - 1] && t[j - 1] == u[k - 1] {
                    dp[i - 1][j - 1][k - 1] + 1
                } else {
                    dp[i - 1][j][k].max(dp[i][j - 1][k]).max(dp[i][j][k - 1])
                };
            }
        }
    }
    dp[n][m][p]
}

fn write_csv(measurements: &[Measurement]) {
    println!("scenario,size_desc,result,wall_s,rss_delta_kib,verification");
    for m in measurements {
        println!(
            "{},{},{},{:.3},{},{}",
            m.scenario,
            m.size_desc,
            m.result,
            m.wall_s,
            m.rss_delta_kib,
            m.verification.label()
        );
    }
}

fn write_table(measurements: &[Measurement]) {
    let mut col1 = "scenario".len();
    let mut col2 = "size".len();
    for m in measurements {
        col1 = col1.max(m.scenario.len());
        col2 = col2.max(m.size_desc.len());
    }

    println!(
        "{:<col1$}  {:<col2$}  {:>12}  {:>10}  {:>14}  {:>12}",
        "scenario", "size", "result", "wall_s", "rss_delta_kib", "status",
    );
    for m in measurements {
        println!(
            "{:<col1$}  {:<col2$}  {:>12}  {:>10.3}  {:>14}  {:>12}",
            m.scenario,
            m.size_desc,
            m.result,
            m.wall_s,
            m.rss_delta_kib,
            m.verification.label(),
        );
    }
}

fn write_json(measurements: &[Measurement]) {
    println!("[");
    for (idx, m) in measurements.iter().enumerate() {
        println!(
            "  {{\"scenario\":\"{}\",\"size\":\"{}\",\"result\":{},\"wall_s\":{:.3},\"rss_delta_kib\":{},\"verification\":\"{}\"}}{}",
            m.scenario,
            m.size_desc,
            m.result,
            m.wall_s,
            m.rss_delta_kib,
            m.verification.label(),
            if idx + 1 == measurements.len() { "" } else { "," }
        );
    }
    println!("]");
}
