//! Shared sample content for engine tests.

use monmaker_domain::{
    AttributeType, AttributeTypeId, Effect, EffectTarget, EventKind, EventNode, EvolutionCondition,
    GameData, Item, ItemCategory, ItemDrop, ItemId, MapNode, MapNodeKind, MetaValue, Monmus,
    MonmusId, MultilingualText, Npc, NpcId, NpcKind, PartyMember, Quest, QuestId, Skill, SkillId,
    UsageContext, WildEncounter,
};

/// A small game in which every checked reference resolves.
pub fn sample_game() -> GameData {
    let fire = AttributeTypeId::new(1);
    let water = AttributeTypeId::new(2);

    let mut data = GameData::new(
        MultilingualText::new("몬무 모험").with_en("Monmu Adventure"),
        MultilingualText::new("테스트 게임"),
    )
    .with_author("tester");

    data.attributes = vec![
        AttributeType::new(fire, MultilingualText::new("불"))
            .with_matchup(water, 0.5)
            .with_matchup(fire, 0.5),
        AttributeType::new(water, MultilingualText::new("물")).with_matchup(fire, 2.0),
    ];

    data.skills = vec![
        Skill::new(SkillId::new(1), MultilingualText::new("불꽃"), fire)
            .with_power(40)
            .with_effect(Effect::new("damage", 40.0)),
        Skill::new(SkillId::new(2), MultilingualText::new("물대포"), water).with_effect(
            Effect::new("stat_change", -1.0)
                .with_target(EffectTarget::Opponent)
                .with_duration(3),
        ),
    ];

    let mut potion = Item::new(
        ItemId::new(1),
        MultilingualText::new("포션"),
        ItemCategory::Potion,
        UsageContext::Both,
    );
    potion.price = 300;
    potion.effects.push(Effect::new("heal", 20.0).with_target(EffectTarget::User));
    data.items = vec![potion];

    data.monmus_list = vec![
        Monmus::new(MonmusId::new(1), MultilingualText::new("불냥이"), 1, vec![fire])
            .with_skill(1, SkillId::new(1))
            .with_evolution(EvolutionCondition::at_level(16, MonmusId::new(2))),
        Monmus::new(
            MonmusId::new(2),
            MultilingualText::new("불호랑"),
            2,
            vec![fire, water],
        )
        .with_skill(1, SkillId::new(1))
        .with_skill(20, SkillId::new(2)),
    ];

    let mut route = MapNode::new("route-1", MultilingualText::new("1번 도로"), MapNodeKind::Field)
        .connect_to("town-1");
    route.encounter_rate = 0.3;
    route.wild_monmus.push(WildEncounter {
        monmus_id: Some(MonmusId::new(1)),
        level_range: Some(MetaValue::List(vec![MetaValue::Integer(2), MetaValue::Integer(5)])),
        ..Default::default()
    });
    route.items.push(ItemDrop {
        item_id: Some(ItemId::new(1)),
        probability: Some(0.1),
        ..Default::default()
    });
    data.map_nodes = vec![
        route,
        MapNode::new("town-1", MultilingualText::new("시작 마을"), MapNodeKind::Town)
            .connect_to("route-1"),
    ];

    let mut intro = EventNode::new("intro", EventKind::Dialogue);
    intro.next_nodes.push("first-battle".into());
    intro
        .metadata
        .insert("speaker".to_string(), MetaValue::Text("박사".to_string()));
    data.events = vec![intro, EventNode::new("first-battle", EventKind::Battle)];

    let mut trainer = Npc::new(
        NpcId::new(1),
        MultilingualText::new("라이벌"),
        MultilingualText::new("승부다!"),
    );
    trainer.kind = NpcKind::Trainer;
    trainer.party.push(PartyMember {
        monmus_id: Some(MonmusId::new(1)),
        level: Some(5),
        ..Default::default()
    });
    trainer.quests.push(QuestId::new(1));
    data.npcs = vec![trainer];

    let mut first = Quest::new(QuestId::new(1), MultilingualText::new("첫 걸음"));
    first
        .rewards
        .insert("money".to_string(), MetaValue::Integer(500));
    data.quests = vec![
        first,
        Quest::new(QuestId::new(2), MultilingualText::new("다음 걸음")).requires(QuestId::new(1)),
    ];

    data.settings
        .insert("starting_money".to_string(), MetaValue::Integer(3000));
    data
}
