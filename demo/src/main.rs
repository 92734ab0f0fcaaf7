use wirecheck::{verify_with, LogSink, Net, Netlist, Solution, TerminalRegistry, VerifyConfig};

fn main() {
    tracing_subscriber::fmt::init();

    let registry: TerminalRegistry = vec![(1, 1, 1), (2, 5, 1), (3, 3, 0), (4, 3, 4), (5, 6, 4)].into_iter().collect();
    let netlist = Netlist::new(vec![(1, 2), (3, 4), (4, 5)]);

    // Net (3, 4) hops over net (1, 2) on layer 1; net (4, 5) shares terminal 4 with it.
    let solution = Solution::new(
        vec![
            Net::new((1, 2), vec![(1, 1).into(), (2, 1).into(), (3, 1).into(), (4, 1).into(), (5, 1).into()]),
            Net::new(
                (3, 4),
                vec![(3, 0).into(), (3, 0, 1).into(), (3, 1, 1).into(), (3, 2, 1).into(), (3, 2).into(), (3, 3).into(), (3, 4).into()],
            ),
            Net::new((4, 5), vec![(3, 4).into(), (4, 4).into(), (5, 4).into(), (6, 4).into()]),
        ],
        13,
    );

    let report = verify_with(&solution, &registry, Some(&netlist), &VerifyConfig::default());
    report.emit(&mut LogSink);

    if !report.passed() {
        log::error!("solution rejected");
        std::process::exit(1);
    }

    log::info!("solution accepted");
}
