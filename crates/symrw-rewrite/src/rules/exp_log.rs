//! Exponential and logarithm rules (`spec.md` §4.7 "Exp and log rules").

use symrw_expr::{Constant, Op};
use symrw_match::Pattern;

use crate::rule::{Rewrite, RewriteSystem};

pub fn exp_log_rules() -> RewriteSystem {
    let (x_cancel1, _) = Pattern::var("x_el_cancel1");
    let exp_log_cancel = Rewrite::new(
        Pattern::node(Op::Exp, vec![Pattern::node(Op::Log, vec![x_cancel1.clone()])]),
        x_cancel1,
    );

    let (x_cancel2, _) = Pattern::var("x_el_cancel2");
    let log_exp_cancel = Rewrite::new(
        Pattern::node(Op::Log, vec![Pattern::node(Op::Exp, vec![x_cancel2.clone()])]),
        x_cancel2,
    );

    let log_one = Rewrite::new(
        Pattern::node(Op::Log, vec![Pattern::Constant(Constant::Int(1))]),
        Pattern::Constant(Constant::Int(0)),
    );

    let log_e = Rewrite::new(
        Pattern::node(Op::Log, vec![Pattern::node(Op::E, vec![])]),
        Pattern::Constant(Constant::Int(1)),
    );

    let (x_logmul, _) = Pattern::var("x_el_logmul");
    let (y_logmul, _) = Pattern::var("y_el_logmul");
    let log_of_product = Rewrite::new(
        Pattern::node(Op::Log, vec![Pattern::node(Op::Mul, vec![x_logmul.clone(), y_logmul.clone()])]),
        Pattern::node(
            Op::Add,
            vec![
                Pattern::node(Op::Log, vec![x_logmul]),
                Pattern::node(Op::Log, vec![y_logmul]),
            ],
        ),
    );

    let (x_logdiv, _) = Pattern::var("x_el_logdiv");
    let (y_logdiv, _) = Pattern::var("y_el_logdiv");
    let log_of_quotient = Rewrite::new(
        Pattern::node(Op::Log, vec![Pattern::node(Op::Div, vec![x_logdiv.clone(), y_logdiv.clone()])]),
        Pattern::node(
            Op::Sub,
            vec![
                Pattern::node(Op::Log, vec![x_logdiv]),
                Pattern::node(Op::Log, vec![y_logdiv]),
            ],
        ),
    );

    let (x_logpow, _) = Pattern::var("x_el_logpow");
    let (a_logpow, _) = Pattern::var("a_el_logpow");
    let log_of_power = Rewrite::new(
        Pattern::node(Op::Log, vec![Pattern::node(Op::Pow, vec![x_logpow.clone(), a_logpow.clone()])]),
        Pattern::node(Op::Mul, vec![a_logpow, Pattern::node(Op::Log, vec![x_logpow])]),
    );

    let (a_expsum, _) = Pattern::var("a_el_expsum");
    let (b_expsum, _) = Pattern::var("b_el_expsum");
    let exp_of_sum = Rewrite::new(
        Pattern::node(Op::Exp, vec![Pattern::node(Op::Add, vec![a_expsum.clone(), b_expsum.clone()])]),
        Pattern::node(
            Op::Mul,
            vec![
                Pattern::node(Op::Exp, vec![a_expsum]),
                Pattern::node(Op::Exp, vec![b_expsum]),
            ],
        ),
    );

    let (a_expdiff, _) = Pattern::var("a_el_expdiff");
    let (b_expdiff, _) = Pattern::var("b_el_expdiff");
    let exp_of_difference = Rewrite::new(
        Pattern::node(Op::Exp, vec![Pattern::node(Op::Sub, vec![a_expdiff.clone(), b_expdiff.clone()])]),
        Pattern::node(
            Op::Div,
            vec![
                Pattern::node(Op::Exp, vec![a_expdiff]),
                Pattern::node(Op::Exp, vec![b_expdiff]),
            ],
        ),
    );

    let (n_explog, _) = Pattern::var("n_el_explog");
    let (a_explog, _) = Pattern::var("a_el_explog");
    let exp_of_n_log_a = Rewrite::new(
        Pattern::node(
            Op::Exp,
            vec![Pattern::node(
                Op::Mul,
                vec![n_explog.clone(), Pattern::node(Op::Log, vec![a_explog.clone()])],
            )],
        ),
        Pattern::node(Op::Pow, vec![a_explog, n_explog]),
    );

    RewriteSystem::new(vec![
        Box::new(exp_log_cancel),
        Box::new(log_exp_cancel),
        Box::new(log_one),
        Box::new(log_e),
        Box::new(log_of_product),
        Box::new(log_of_quotient),
        Box::new(log_of_power),
        Box::new(exp_of_sum),
        Box::new(exp_of_difference),
        Box::new(exp_of_n_log_a),
    ])
}
