//! Unroll a loop body a fixed number of times. This is a macro that performs manual loop unrolling,
//! so the unrolled benchmark loops keep their shape regardless of what LLVM decides to do with
//! the straight ones.
//! The counter is declared with the given type and advanced by `$inc` between the copies of the
//! body, but not after the last one.

macro_rules! unroll {
    (1, |$i:ident: $t:ty = {$e:expr}| $s:stmt, $inc:expr) => { let mut $i: $t = $e; $s };
    (2, |$i:ident: $t:ty = {$e:expr}| $s:stmt, $inc:expr) => { unroll!(1, |$i: $t = {$e}| $s, $inc); $inc; $s };
    (3, |$i:ident: $t:ty = {$e:expr}| $s:stmt, $inc:expr) => { unroll!(2, |$i: $t = {$e}| $s, $inc); $inc; $s };
    (4, |$i:ident: $t:ty = {$e:expr}| $s:stmt, $inc:expr) => { unroll!(3, |$i: $t = {$e}| $s, $inc); $inc; $s };
    (5, |$i:ident: $t:ty = {$e:expr}| $s:stmt, $inc:expr) => { unroll!(4, |$i: $t = {$e}| $s, $inc); $inc; $s };
    (6, |$i:ident: $t:ty = {$e:expr}| $s:stmt, $inc:expr) => { unroll!(5, |$i: $t = {$e}| $s, $inc); $inc; $s };
    (7, |$i:ident: $t:ty = {$e:expr}| $s:stmt, $inc:expr) => { unroll!(6, |$i: $t = {$e}| $s, $inc); $inc; $s };
    (8, |$i:ident: $t:ty = {$e:expr}| $s:stmt, $inc:expr) => { unroll!(7, |$i: $t = {$e}| $s, $inc); $inc; $s };
}

// export the macro to the crate
pub(crate) use unroll;
