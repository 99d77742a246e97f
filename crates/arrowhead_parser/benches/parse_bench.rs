use arrowhead_options::ParseOptions;
use arrowhead_parser::Parser;
use bumpalo::Bump;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// A medium-size TypeScript module with the usual mix of declarations
const TYPESCRIPT_SOURCE: &str = r#"
import { EventEmitter } from 'events';
import type { Readable } from 'stream';

export interface Job {
    id: number;
    name: string;
    priority?: number;
    tags: readonly string[];
}

export type JobHandler<T = unknown> = (job: Job, payload: T) => Promise<void> | void;

enum State {
    Idle,
    Running = 'running',
    Done = 1 << 2,
}

export abstract class Queue<T> extends EventEmitter {
    private readonly jobs: Map<number, Job> = new Map();
    protected state: State = State.Idle;
    #nextId = 1;

    constructor(private readonly handler: JobHandler<T>, public name?: string) {
        super();
    }

    abstract capacity(): number;

    push(name: string, priority = 0, ...tags: string[]): Job {
        const job: Job = { id: this.#nextId++, name, priority, tags };
        this.jobs.set(job.id, job);
        this.emit('push', job);
        return job;
    }

    async drain(payload: T): Promise<number> {
        let count = 0;
        for (const [id, job] of this.jobs) {
            this.state = State.Running;
            await this.handler(job, payload);
            this.jobs.delete(id);
            count += 1;
        }
        this.state = State.Done;
        return count;
    }

    get size(): number {
        return this.jobs.size;
    }

    byPriority(): Job[] {
        return [...this.jobs.values()].sort((a, b) => (b.priority ?? 0) - (a.priority ?? 0));
    }
}

export function pipe<A, B, C>(f: (a: A) => B, g: (b: B) => C): (a: A) => C {
    return (a) => g(f(a));
}

export const summarize = (jobs: Job[]) =>
    jobs
        .filter(({ priority = 0 }) => priority > 1)
        .map(job => `${job.id}:${job.name}`)
        .join(', ');

function* ids(start: number): Generator<number> {
    while (true) yield start++;
}

export default class extends Queue<string> {
    capacity() {
        return 16;
    }
}
"#;

// Parenthesized heads that resolve both ways, nested several levels deep
const COVER_SOURCE: &str = r#"
const a = (x, y) => (x, y);
const b = async (x, { y = 1 }, [z], ...rest) => await f(x, y, z, ...rest);
const c = async (x, y);
const d = (x = 1, y?, z: number): number => x + z;
const e = ((p) => (q) => (r) => p + q + r)(1)(2)(3);
const f = cond ? (x) : y => x;
const g = (((((a)))));
const h = (a, b) => (c, d) => (e, f) => a + b + c + d + e + f;
"#;

const JSX_SOURCE: &str = r#"
export function List({ items, onSelect }) {
    return (
        <ul className="list" data-count={items.length}>
            {items.map(item => (
                <li key={item.id} onClick={() => onSelect(item)}>
                    <strong>{item.title}</strong> &middot; {item.body}
                </li>
            ))}
            <>
                <Footer.Link href="/more" {...props} />
            </>
        </ul>
    );
}
"#;

fn bench_parse(c: &mut Criterion, name: &str, source: &'static str, options: ParseOptions) {
    c.bench_function(name, |b| {
        b.iter(|| {
            let arena = Bump::new();
            let result = Parser::new(&arena, black_box(source), options).parse();
            black_box(result.root);
        });
    });
}

fn bench_parse_typescript(c: &mut Criterion) {
    bench_parse(c, "parse_typescript_medium", TYPESCRIPT_SOURCE, ParseOptions::module());
}

fn bench_parse_cover_grammar(c: &mut Criterion) {
    bench_parse(c, "parse_cover_grammar", COVER_SOURCE, ParseOptions::script());
}

fn bench_parse_jsx(c: &mut Criterion) {
    bench_parse(c, "parse_jsx", JSX_SOURCE, ParseOptions::module().with_jsx(true));
}

criterion_group!(benches, bench_parse_typescript, bench_parse_cover_grammar, bench_parse_jsx);
criterion_main!(benches);
