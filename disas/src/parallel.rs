use std::{
    io::{self, Write},
    panic, thread,
};

use crate::{App, Code};

/// Splits `code` into one block per thread, every split is an instruction boundary.
///
/// The size-only decode path is cheap enough to find the boundaries up front.
fn split_blocks(app: &App, code: &Code) -> Vec<usize> {
    let block_size = code.data.len() / app.threads + 1;
    let mut splits = vec![0];
    let mut offset = 0;
    let mut next = block_size;
    while offset < code.data.len() {
        if offset >= next {
            splits.push(offset);
            next = offset + block_size;
        }
        offset += app.step(code, offset);
    }
    splits.push(code.data.len());
    debug!("{}: {} blocks of ~{block_size} bytes", code.name, splits.len() - 1);
    splits
}

pub fn disassemble_code(app: &App, code: &Code) -> Result<(), io::Error> {
    let splits = split_blocks(app, code);

    thread::scope(|s| {
        let workers: Vec<_> = splits
            .windows(2)
            .enumerate()
            .map(|(id, range)| {
                let (start, end) = (range[0], range[1]);
                s.spawn(move || {
                    debug!("thread#{id}: {start:#x}..{end:#x}");
                    let mut buffer = Vec::with_capacity(64 * (end - start));
                    app.disassemble_range(code, start, end, &mut buffer)
                        .map(|_| buffer)
                })
            })
            .collect();

        // blocks are printed in order as the workers finish
        let mut stdout = io::stdout().lock();
        for worker in workers {
            let buffer = match worker.join() {
                Ok(result) => result?,
                Err(err) => panic::resume_unwind(err),
            };
            stdout.write_all(&buffer)?;
        }
        stdout.flush()
    })
}
