use std::collections::HashMap;

use ipnet::IpNet;

use super::*;
use crate::RouteTable;

/// Reference implementation: scan every entry and keep the most specific one containing the
/// query. Containment never holds across address families, and among containing entries the
/// prefix lengths are distinct, so the maximum is unique.
fn reference(model: &HashMap<IpNet, i16>, query: &IpNet) -> Option<(IpNet, i16)> {
    model
        .iter()
        .filter(|(net, _)| net.contains(query))
        .max_by_key(|(net, _)| net.prefix_len())
        .map(|(net, t)| (*net, *t))
}

/// Check the table against the reference for a network query and for the equivalent address
/// query when the queried network is a host route.
fn agrees(table: &RouteTable<i16>, model: &HashMap<IpNet, i16>, query: &IpNet) -> bool {
    let want = reference(model, query);
    if table
        .match_longest_net(query)
        .map(|(net, t)| (net, *t))
        != want
    {
        return false;
    }
    if query.prefix_len() == query.max_prefix_len()
        && table.match_longest(query.addr()).map(|(net, t)| (net, *t)) != want
    {
        return false;
    }
    true
}

fn build<P: Copy>(
    ops: &[Operation<P, i16>],
    to_net: impl Fn(P) -> IpNet,
) -> (RouteTable<i16>, HashMap<IpNet, i16>) {
    let mut table = RouteTable::new();
    let mut model = HashMap::new();
    for op in ops {
        match *op {
            Operation::Add(p, t) => {
                table.insert(to_net(p), t);
                model.insert(to_net(p), t);
            }
            Operation::Remove(p) => {
                table.remove(&to_net(p));
                model.remove(&to_net(p));
            }
        }
    }
    (table, model)
}

qc!(lpm_v4, _lpm_v4);
fn _lpm_v4(
    (ops, queries): (Vec<Operation<TestNet4, i16>>, Vec<(TestNet4, u32)>),
) -> bool {
    let (table, model) = build(&ops, TestNet4::net);

    // query the inserted networks themselves, addresses inside them, and their salts as
    // unrelated addresses
    queries.into_iter().all(|(q, salt)| {
        agrees(&table, &model, &q.net())
            && agrees(&table, &model, &q.member(salt))
            && agrees(&table, &model, &IpNet::V4(ipnet::Ipv4Net::new(salt.into(), 32).unwrap()))
    })
}

qc!(lpm_v6, _lpm_v6);
fn _lpm_v6(
    (ops, queries): (Vec<Operation<TestNet6, i16>>, Vec<(TestNet6, u128)>),
) -> bool {
    let (table, model) = build(&ops, TestNet6::net);

    queries.into_iter().all(|(q, salt)| {
        agrees(&table, &model, &q.net())
            && agrees(&table, &model, &q.member(salt))
            && agrees(&table, &model, &IpNet::V6(ipnet::Ipv6Net::new(salt.into(), 128).unwrap()))
    })
}

qc!(lpm_mixed_families, _lpm_mixed_families);
fn _lpm_mixed_families(
    (ops, queries): (Vec<Operation<TestNet, i16>>, Vec<TestNet>),
) -> bool {
    let (table, model) = build(&ops, TestNet::net);

    // the reference only ever matches within one family, so this also checks isolation
    queries.into_iter().all(|q| {
        let member = match q {
            TestNet::V4(n) => n.member(0x5a5a5a5a),
            TestNet::V6(n) => n.member(0x5a5a5a5a_5a5a5a5a_5a5a5a5a_5a5a5a5au128),
        };
        agrees(&table, &model, &q.net()) && agrees(&table, &model, &member)
    })
}

qc!(lpm_shadowing_after_removal, _lpm_shadowing_after_removal);
fn _lpm_shadowing_after_removal(
    (list, queries): (Vec<(TestNet4, i16)>, Vec<(TestNet4, u32)>),
) -> bool {
    // insert everything, then remove the most specific half; matches must fall back to the
    // remaining covering entries
    let mut table = RouteTable::new();
    let mut model = HashMap::new();
    for (p, t) in &list {
        table.insert(p.net(), *t);
        model.insert(p.net(), *t);
    }
    let mut by_len: Vec<IpNet> = model.keys().copied().collect();
    by_len.sort_by_key(|net| std::cmp::Reverse(net.prefix_len()));
    for net in by_len.into_iter().take(model.len() / 2) {
        table.remove(&net);
        model.remove(&net);
    }

    queries
        .into_iter()
        .all(|(q, salt)| agrees(&table, &model, &q.member(salt)))
}
