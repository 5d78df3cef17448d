criterion::criterion_main!(hex::benches, text::benches);

fn benchid(base: KvPairs, last: KvPairs) -> String {
    format!("{base},{last}")
}

#[derive(Clone, Copy, Debug)]
struct KvPair<'a>(&'a str, &'a str);

impl std::fmt::Display for KvPair<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{k}={v}", k = self.0, v = self.1)
    }
}

#[derive(Clone, Copy, Debug)]
struct KvPairs<'a>(&'a [KvPair<'a>]);

impl std::fmt::Display for KvPairs<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut delim = "";
        for pair in self.0 {
            write!(f, "{delim}{pair}")?;
            delim = ",";
        }
        Ok(())
    }
}

mod hex {
    criterion::criterion_group!(benches, bench_hex);

    use criterion::{black_box, Criterion};
    use extensions_util::hex::{from_hex_string, hex_decode, to_hex_string, HexDisplay};

    use super::{benchid, KvPair, KvPairs};

    const LENGTHS: [usize; 3] = [16, 256, 4096];

    fn bench_hex(c: &mut Criterion) {
        for len in LENGTHS {
            let data: Vec<u8> = (0..len).map(|i| i as u8).collect();
            let text = to_hex_string(&data);
            let len_str = len.to_string();
            let base = [KvPair("utility", "hex"), KvPair("length", &len_str)];
            let id = |op| benchid(KvPairs(&base), KvPairs(&[KvPair("operation", op)]));

            c.bench_function(&id("encode"), |bench| {
                bench.iter(|| to_hex_string(black_box(&data)));
            });

            c.bench_function(&id("display"), |bench| {
                bench.iter(|| black_box(&data).fmt_hex().to_string());
            });

            c.bench_function(&id("decode"), |bench| {
                bench.iter(|| from_hex_string(black_box(&text)).unwrap());
            });

            c.bench_function(&id("decode_into"), |bench| {
                let mut out = vec![0u8; len];
                bench.iter(|| hex_decode(black_box(text.as_bytes()), &mut out).unwrap());
            });
        }
    }
}

mod text {
    criterion::criterion_group!(benches, bench_clear_path, bench_format_line);

    use criterion::{black_box, Criterion};
    use extensions_util::{fmt::append_format_line, path::clear_path};

    use super::{benchid, KvPair, KvPairs};

    fn bench_clear_path(c: &mut Criterion) {
        let path = "C:\\Users\\someone\\My <Documents>|drafts//notes?.txt".repeat(8);
        let base = [KvPair("utility", "path")];
        c.bench_function(
            &benchid(KvPairs(&base), KvPairs(&[KvPair("operation", "clear")])),
            |bench| bench.iter(|| clear_path(black_box(&path))),
        );
    }

    fn bench_format_line(c: &mut Criterion) {
        let base = [KvPair("utility", "fmt")];
        c.bench_function(
            &benchid(KvPairs(&base), KvPairs(&[KvPair("operation", "append_line")])),
            |bench| {
                let mut buf = String::with_capacity(64);
                bench.iter(|| {
                    buf.clear();
                    append_format_line(&mut buf, "{0,-8}|{1,6}|{2}", &[&"name", &42, &'x'])
                        .unwrap()
                        .len()
                })
            },
        );
    }
}
