// 宝可梦进化链
// 由扁平的种族列表（每个节点带可选的上一形态ID）重建分阶段的进化树
//
// 第0阶段为没有上一形态的节点；第k阶段为上一形态位于第k-1阶段的节点。
// 支持分支进化（例如伊布），同一阶段可以包含多个不同父节点的子节点。

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use log::warn;

use super::species::PokemonId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionNode {
    pub id: PokemonId,
    pub name: String,
    pub evolves_from_species_id: Option<PokemonId>,
}

impl EvolutionNode {
    pub fn new(id: PokemonId, name: impl Into<String>, evolves_from: Option<PokemonId>) -> Self {
        Self {
            id,
            name: name.into(),
            evolves_from_species_id: evolves_from,
        }
    }

    pub fn is_base(&self) -> bool {
        self.evolves_from_species_id.is_none()
    }
}

// 按阶段分组
//
// 父节点无法在上一阶段找到的节点不会出现在结果中。
// 空输入返回空序列。
pub fn build_stages(nodes: &[EvolutionNode]) -> Vec<Vec<EvolutionNode>> {
    let mut stages: Vec<Vec<EvolutionNode>> = Vec::new();

    let bases: Vec<EvolutionNode> = nodes.iter().filter(|n| n.is_base()).cloned().collect();
    if bases.is_empty() {
        return stages;
    }

    // 已放置的ID，避免重复ID或自引用导致死循环
    let mut placed: HashSet<PokemonId> = bases.iter().map(|n| n.id).collect();
    let mut current = bases;
    loop {
        let current_ids: HashSet<PokemonId> = current.iter().map(|n| n.id).collect();
        let next: Vec<EvolutionNode> = nodes
            .iter()
            .filter(|n| !placed.contains(&n.id))
            .filter(|n| {
                n.evolves_from_species_id
                    .map_or(false, |parent| current_ids.contains(&parent))
            })
            .cloned()
            .collect();
        placed.extend(next.iter().map(|n| n.id));

        stages.push(current);
        if next.is_empty() {
            break;
        }
        current = next;
    }

    stages
}

// 无法挂到任何阶段上的节点
pub fn orphans(nodes: &[EvolutionNode], stages: &[Vec<EvolutionNode>]) -> Vec<EvolutionNode> {
    let placed: HashSet<PokemonId> = stages.iter().flatten().map(|n| n.id).collect();
    nodes
        .iter()
        .filter(|n| !placed.contains(&n.id))
        .cloned()
        .collect()
}

// 分阶段的进化链
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvolutionStages {
    stages: Vec<Vec<EvolutionNode>>,
}

impl EvolutionStages {
    pub fn build(nodes: &[EvolutionNode]) -> Self {
        let stages = build_stages(nodes);

        let dropped = orphans(nodes, &stages);
        if !dropped.is_empty() {
            let ids: Vec<PokemonId> = dropped.iter().map(|n| n.id).collect();
            warn!("进化链中有 {} 个节点无法找到上一形态，已忽略: {:?}", ids.len(), ids);
        }

        Self { stages }
    }

    pub fn stages(&self) -> &[Vec<EvolutionNode>] {
        &self.stages
    }

    pub fn into_stages(self) -> Vec<Vec<EvolutionNode>> {
        self.stages
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn node_count(&self) -> usize {
        self.stages.iter().map(Vec::len).sum()
    }

    // 某个种族所在阶段
    pub fn stage_of(&self, id: PokemonId) -> Option<usize> {
        self.stages
            .iter()
            .position(|stage| stage.iter().any(|n| n.id == id))
    }

    // 只有一个节点的进化链不需要展示
    pub fn is_displayable(&self) -> bool {
        self.node_count() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(stages: &[Vec<EvolutionNode>]) -> Vec<Vec<PokemonId>> {
        stages
            .iter()
            .map(|stage| stage.iter().map(|n| n.id).collect())
            .collect()
    }

    #[test]
    fn test_linear_chain() {
        let nodes = vec![
            EvolutionNode::new(6, "charizard", Some(5)),
            EvolutionNode::new(4, "charmander", None),
            EvolutionNode::new(5, "charmeleon", Some(4)),
        ];
        assert_eq!(ids(&build_stages(&nodes)), vec![vec![4], vec![5], vec![6]]);
    }

    #[test]
    fn test_branching_chain() {
        let nodes = vec![
            EvolutionNode::new(1, "a", None),
            EvolutionNode::new(2, "b", Some(1)),
            EvolutionNode::new(3, "c", Some(1)),
        ];
        assert_eq!(ids(&build_stages(&nodes)), vec![vec![1], vec![2, 3]]);
    }

    #[test]
    fn test_eevee_style_branching() {
        let mut nodes = vec![EvolutionNode::new(133, "eevee", None)];
        for (id, name) in [(134, "vaporeon"), (135, "jolteon"), (136, "flareon"), (700, "sylveon")] {
            nodes.push(EvolutionNode::new(id, name, Some(133)));
        }

        let stages = EvolutionStages::build(&nodes);
        assert_eq!(stages.stage_count(), 2);
        assert_eq!(stages.stages()[1].len(), 4);
        assert_eq!(stages.stage_of(700), Some(1));
        assert!(stages.is_displayable());
    }

    #[test]
    fn test_stage_with_children_of_different_parents() {
        // 两个第1阶段节点各自进化
        let nodes = vec![
            EvolutionNode::new(265, "wurmple", None),
            EvolutionNode::new(266, "silcoon", Some(265)),
            EvolutionNode::new(268, "cascoon", Some(265)),
            EvolutionNode::new(267, "beautifly", Some(266)),
            EvolutionNode::new(269, "dustox", Some(268)),
        ];
        assert_eq!(
            ids(&build_stages(&nodes)),
            vec![vec![265], vec![266, 268], vec![267, 269]]
        );
    }

    #[test]
    fn test_single_node() {
        let nodes = vec![EvolutionNode::new(128, "tauros", None)];
        let stages = EvolutionStages::build(&nodes);
        assert_eq!(ids(stages.stages()), vec![vec![128]]);
        assert!(!stages.is_displayable());
    }

    #[test]
    fn test_empty_input() {
        assert!(build_stages(&[]).is_empty());
        assert_eq!(EvolutionStages::build(&[]).node_count(), 0);
    }

    #[test]
    fn test_orphan_is_dropped() {
        let nodes = vec![
            EvolutionNode::new(1, "a", None),
            EvolutionNode::new(2, "b", Some(1)),
            EvolutionNode::new(9, "orphan", Some(42)),
        ];
        let stages = build_stages(&nodes);
        assert_eq!(ids(&stages), vec![vec![1], vec![2]]);

        let dropped = orphans(&nodes, &stages);
        assert_eq!(dropped.len(), 1);
        assert_eq!(dropped[0].id, 9);
    }

    #[test]
    fn test_self_reference_terminates() {
        let nodes = vec![
            EvolutionNode::new(1, "a", None),
            EvolutionNode::new(1, "a-loop", Some(1)),
        ];
        assert_eq!(ids(&build_stages(&nodes)), vec![vec![1]]);
    }

    #[test]
    fn test_every_node_placed_once_with_parent_in_previous_stage() {
        let nodes = vec![
            EvolutionNode::new(43, "oddish", None),
            EvolutionNode::new(44, "gloom", Some(43)),
            EvolutionNode::new(45, "vileplume", Some(44)),
            EvolutionNode::new(182, "bellossom", Some(44)),
        ];
        let stages = build_stages(&nodes);

        let placed: Vec<PokemonId> = stages.iter().flatten().map(|n| n.id).collect();
        assert_eq!(placed.len(), nodes.len());
        for node in &nodes {
            assert_eq!(placed.iter().filter(|&&id| id == node.id).count(), 1);
        }

        assert!(stages[0].iter().all(|n| n.is_base()));
        for k in 1..stages.len() {
            for node in &stages[k] {
                let parent = node.evolves_from_species_id.unwrap();
                assert!(stages[k - 1].iter().any(|p| p.id == parent));
            }
        }
    }
}
