use divan::AllocProfiler;

#[global_allocator]
static ALLOC: AllocProfiler = AllocProfiler::system();

fn main() {
    divan::main();
}

pub mod scan {
    use divan::Bencher;
    use fmtspec_printf::{compare, scan, CompareOptions, Signature};

    const INPUTS: [&str; 4] = [
        "Plain text without any specifier, which is the common case in most tables.",
        "%@ has %d new messages",
        "%1$d:%2$.*3$d:%4$.*3$d",
        "%#@files@ in %[folders]@, %-08.3lf%% done, %2$hhu of %3$lld",
    ];

    #[divan::bench(args = INPUTS)]
    fn specifiers(format: &str) {
        divan::black_box(scan(format).unwrap());
    }

    #[divan::bench]
    fn signature_compare(bencher: Bencher) {
        let options = CompareOptions::default();
        bencher
            .with_inputs(|| {
                (
                    scan("%@ has %d new messages in %#@folders@").unwrap(),
                    scan("%2$d new messages in %#@folders@ for %1$@").unwrap(),
                )
            })
            .bench_refs(|(base, other)| {
                let base = Signature::new(base, &options);
                let other = Signature::new(other, &options);
                divan::black_box(compare(&base, &other, &options));
            });
    }
}
